//! Fixed prompt skeletons, one per stage.

pub fn meal_plan(goals: &str, diet: &str, restrictions: &str, fitness_level: &str) -> String {
    format!(
        "As a nutritionist, create a personalized meal plan based on:

User Goals: {goals}
Dietary Preferences: {diet}
Restrictions: {restrictions}
Fitness Level: {fitness_level}

Provide:
1. Daily meal schedule with specific times
2. Specific food items and portions
3. Nutritional information
4. Preparation instructions
5. Notes on how it complements workouts and meditation

Format the response in a clear, structured way."
    )
}

pub fn workout_plan(fitness_level: &str, equipment: &str) -> String {
    format!(
        "As a fitness trainer, design a workout plan considering:

Fitness Level: {fitness_level}
Available Equipment: {equipment}

Consider:
1. How the workout timing affects meal schedules
2. Energy levels needed for meditation
3. Recovery time needed between activities

Provide:
1. Workout schedule with specific times
2. Warm-up routine
3. Main exercises with sets and reps
4. Cool-down exercises
5. Modifications for different fitness levels
6. Notes on how it complements meals and meditation

Format the response in a clear, structured way."
    )
}

pub fn mindfulness_plan(mood: &str) -> String {
    format!(
        "As a mindfulness expert, create a mindfulness plan based on:

Current Mood: {mood}

Consider:
1. Best times for meditation relative to meals
2. How meditation can enhance workout performance
3. Stress management throughout the day

Provide:
1. Meditation schedule with specific times
2. Meditation techniques
3. Breathing exercises
4. Stress management strategies
5. Notes on how it complements meals and workouts

Format the response in a clear, structured way."
    )
}

pub fn integrated_schedule(meal_plan: &str, workout_plan: &str, mindfulness_plan: &str) -> String {
    format!(
        "As a schedule coordinator, create an integrated daily schedule using:

Meal Plan: {meal_plan}
Workout Plan: {workout_plan}
Mindfulness Plan: {mindfulness_plan}

Your task is to:
1. Review all plans and identify any timing conflicts
2. Suggest adjustments to optimize the schedule
3. Create a cohesive daily timetable
4. Ensure proper spacing between activities
5. Consider energy levels throughout the day

Provide:
1. Hour-by-hour timetable
2. Activity transitions and preparation time
3. Energy level considerations
4. Notes on activity relationships
5. Recommendations for schedule optimization

Format the response in a clear, structured way."
    )
}

pub fn progress_report(history: &str, schedule: &str) -> String {
    format!(
        "As a health coach, generate a weekly progress report based on:

History: {history}
Current Schedule: {schedule}

Analyze:
1. How well the integrated schedule is working
2. Areas for improvement
3. Success metrics

Provide:
1. Weekly achievements summary
2. Progress analysis
3. Motivation and encouragement
4. Suggestions for improvement
5. Next week's goals

Format the response in a clear, structured way."
    )
}
