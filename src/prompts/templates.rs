//! Prompt builders for each generator.
//!
//! Every builder is a pure function of the teacher's selections; the caller
//! validates required fields before building.

use crate::config::{AidKind, ContentKind, Grade, Language, PlanDuration};

/// Quick questions offered by the knowledge base.
pub const QUICK_QUESTIONS: &[&str] = &[
    "Why is the sky blue?",
    "How does rain form?",
    "What makes plants green?",
    "Why do we need oxygen?",
    "How do birds fly?",
    "What causes earthquakes?",
    "Why do we have seasons?",
    "How does the moon change shape?",
];

/// Subjects suggested for lesson planning.
pub const SUBJECTS: &[&str] = &[
    "Mathematics / गणित",
    "Science / विज्ञान",
    "Hindi / हिंदी",
    "English / अंग्रेजी",
    "Social Studies / सामाजिक अध्ययन",
    "Environmental Studies / पर्यावरण अध्ययन",
];

/// Render a numbered list, one item per line.
fn numbered(items: &[&str]) -> String {
    items.iter().enumerate().map(|(i, item)| format!("{}. {}", i + 1, item)).collect::<Vec<_>>().join("\n")
}

/// Prompt for hyper-local stories, poems, explanations, activities and worksheets.
pub fn content_prompt(kind: ContentKind, grade: Grade, language: Language, topic: &str) -> String {
    format!(
        "Create a {kind} for Class {grade} students in {language} language.\n\
         The topic is: {topic}\n\
         \n\
         Requirements:\n\
         - Use culturally relevant examples from Indian context\n\
         - Use simple, age-appropriate language\n\
         - Include local references (Indian festivals, food, places, etc.)\n\
         - Make it engaging and educational\n\
         - If creating a story, include moral values\n\
         - Format it nicely with proper structure\n\
         \n\
         Please respond in {language} language with English translation if needed.",
        topic = topic.trim(),
    )
}

/// Prompt for a multi-grade lesson plan.
pub fn lesson_plan_prompt(subject: &str, topic: &str, grades: &[Grade], duration: PlanDuration) -> String {
    let grades = grades.iter().map(Grade::to_string).collect::<Vec<_>>().join(", ");
    let sections = numbered(&[
        "Learning objectives for each grade level",
        "Daily breakdown of activities",
        "Differentiated teaching strategies for multi-grade classroom",
        "Materials needed (simple, locally available)",
        "Assessment methods",
        "Activities and exercises for each grade",
        "Homework assignments",
        "Cultural relevance and local examples",
        "Interactive group activities",
        "Progress tracking methods",
    ]);

    format!(
        "Create a comprehensive lesson plan for multi-grade teaching in Indian rural schools.\n\
         \n\
         Subject: {subject}\n\
         Topic: {topic}\n\
         Duration: {duration}\n\
         Grades: {grades}\n\
         \n\
         Please provide:\n\
         {sections}\n\
         \n\
         Format it professionally with clear sections and make it practical for teachers with limited resources.",
        subject = subject.trim(),
        topic = topic.trim(),
        duration = duration.describe(),
    )
}

/// Prompt sent alongside a textbook photo to produce one grade's worksheet.
pub fn worksheet_prompt(grade: Grade) -> String {
    let class_students = format!("Create age-appropriate activities for Class {grade} students");
    let steps = numbered(&[
        "First, identify what topic/content is shown in the image",
        class_students.as_str(),
        "Include different types of questions (multiple choice, fill in blanks, short answers, drawing activities)",
        "Use simple language suitable for the grade level",
        "Include Indian cultural context and examples",
        "Format the worksheet professionally with clear instructions",
    ]);

    format!(
        "Analyze this textbook image and create an appropriate worksheet for Class {grade} students.\n\
         \n\
         Please:\n\
         {steps}\n\
         \n\
         Make it engaging and educational for {audience}.",
        audience = grade.audience(),
    )
}

/// Prompt for a child-friendly explanation of a question.
pub fn knowledge_prompt(question: &str, language: Language) -> String {
    let respond_in = format!("Respond in {language} language with English translation if needed");
    let steps = numbered(&[
        "Start with a simple, one-sentence answer",
        "Explain in detail using analogies and examples familiar to Indian children",
        "Use local examples (like roti, curry, monsoon, festivals, etc.)",
        "Keep the language appropriate for children aged 6-11",
        "Include interesting facts or \"did you know\" sections",
        "If applicable, suggest simple activities or demonstrations",
        respond_in.as_str(),
    ]);

    format!(
        "Explain the following question in simple, easy-to-understand language suitable for primary school \
         teachers and students. Use analogies and examples that children can relate to, especially from Indian context.\n\
         \n\
         Question: {question}\n\
         \n\
         Please:\n\
         {steps}\n\
         \n\
         Make it engaging and educational!",
        question = question.trim(),
    )
}

/// Prompt for blackboard drawing instructions.
pub fn visual_aid_prompt(kind: AidKind, description: &str) -> String {
    let items = numbered(&[
        "A clear, step-by-step drawing guide",
        "Specific measurements and positioning",
        "Labels and text to include",
        "Color suggestions (if applicable)",
        "Simple drawing techniques suitable for blackboard",
        "Make it suitable for Indian primary school classrooms",
    ]);

    format!(
        "Create a detailed text-based visual aid description for teachers to draw on a blackboard.\n\
         \n\
         Type: {kind}\n\
         Description: {description}\n\
         \n\
         Please provide:\n\
         {items}\n\
         \n\
         Format the response as clear instructions that a teacher can follow to recreate this visual aid on a \
         blackboard. Include ASCII art where helpful.",
        description = description.trim(),
    )
}
