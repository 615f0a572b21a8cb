//! Bundled seed data: the state a fresh install (or a corrupted store) falls
//! back to.

use crate::{Assignment, Comment, CommunityPrompt, PromptRecord, Role, TagOptions, SEED_SOURCE};

fn prompt(id: &str, text: &str, feature: &str) -> PromptRecord {
    PromptRecord {
        id: id.to_string(),
        text: text.to_string(),
        feature: feature.to_string(),
        reflection: String::new(),
        rating: None,
        pushed_to_community: false,
        user_added: false,
    }
}

/// Demo assignments with prompt histories.
pub fn assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "a1".to_string(),
            title: "Assignment 1 – History essay".to_string(),
            short_label: "Assignment 1".to_string(),
            description: "Write a short essay explaining two different viewpoints on a \
                          historical event and evaluate their strengths and weaknesses."
                .to_string(),
            study_minutes: 135,
            prompts_used: vec![
                prompt(
                    "a1p1",
                    "Give me a quick timeline of events leading up to World War II. \
                     Make as bullet points",
                    "Factcheck",
                ),
                prompt(
                    "a1p2",
                    "Here’s a source from World War II. What point of view might the author \
                     have, then ask me what evidence I noticed myself.",
                    "Source Analysis",
                ),
                prompt(
                    "a1p3",
                    "How are imperialism in Africa and imperialism in Asia similar? How are \
                     they different? And what’s different between my writing, what I need to \
                     improve?",
                    "Comparison",
                ),
                prompt(
                    "a1p4",
                    "Provide a short timeline of the Industrial Revolution and give me the \
                     detailed information to explain.",
                    "Background Research",
                ),
                prompt(
                    "a1p5",
                    "Provide counterarguments to the claim that the Treaty of Versailles \
                     caused WWII.",
                    "Argument Building",
                ),
            ],
        },
        Assignment {
            id: "a2".to_string(),
            title: "Assignment 2 – Science report".to_string(),
            short_label: "Assignment 2".to_string(),
            description: "Prepare a short report about a scientific concept, including a \
                          visual explanation and one real-world application."
                .to_string(),
            study_minutes: 90,
            prompts_used: vec![
                prompt(
                    "a2p1",
                    "Explain the difference between ionic and covalent bonds in a clear way \
                     so I can use it in my chemistry essay introduction.",
                    "Concept Explanation",
                ),
                prompt(
                    "a2p2",
                    "Help me design an experiment to test how temperature affects enzyme \
                     activity. Include variables, materials, and safety notes.",
                    "Experiment Design",
                ),
                prompt(
                    "a2p3",
                    "Show me how to approach difficult multi-step physics problems and break \
                     them into smaller parts. This is my question: A 1200 kg car travels up a \
                     10° incline. The engine provides a forward driving force of 3500 N. \
                     Resistive forces total 900 N. Gravity is 9.8 m/s². What is the car’s \
                     acceleration up the slope?",
                    "Problem Solving",
                ),
                prompt(
                    "a2p4",
                    "Explain the trend in this enzyme activity graph and ask me why the \
                     reaction rate changes.",
                    "Data Analyze",
                ),
                prompt(
                    "a2p5",
                    "Explain how Newton’s laws apply to car safety so I can add real-world \
                     examples to my essay.",
                    "Application",
                ),
            ],
        },
    ]
}

/// Initial community prompt bank (seed prompts from the earlier prototype).
pub fn community_prompts() -> Vec<CommunityPrompt> {
    fn entry(
        id: &str,
        title: &str,
        role: Role,
        subject: &str,
        func: &str,
        scenario: &str,
        prompt_text: &str,
        rationale: &str,
        tags: &[&str],
        helpful_count: u32,
        comments: Vec<Comment>,
    ) -> CommunityPrompt {
        CommunityPrompt {
            id: id.to_string(),
            title: title.to_string(),
            role,
            subject: subject.to_string(),
            func: func.to_string(),
            scenario: scenario.to_string(),
            prompt_text: prompt_text.to_string(),
            rationale: rationale.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            helpful_count,
            source: SEED_SOURCE.to_string(),
            comments,
            user_created: false,
            owner_assignment_id: None,
            owner_prompt_id: None,
        }
    }

    vec![
        entry(
            "c1",
            "Teach-back check for understanding",
            Role::Teacher,
            "Cross-disciplinary",
            "Explain",
            "Classwork",
            "Can you explain this concept in a simpler way so that you could teach it to a \
             younger student in our class?",
            "Invites students to move from receiving information to reorganizing it in \
             their own words, which supports deeper understanding.",
            &["student voice", "critical thinking"],
            3,
            vec![Comment {
                text: "Works well as an exit ticket for Grade 8.".to_string(),
                user_created: false,
            }],
        ),
        entry(
            "c2",
            "Two perspectives and a critique",
            Role::Teacher,
            "History",
            "Compare",
            "Homework",
            "Give me two different viewpoints on this issue and explain the strengths and \
             weaknesses of each. Then ask me one question that will help me decide which \
             view I find more convincing.",
            "Moves students away from single-answer thinking toward evaluating arguments \
             with their own criteria.",
            &["multiple perspectives", "evaluation"],
            4,
            vec![],
        ),
        entry(
            "c3",
            "Writing: revision coach",
            Role::Student,
            "Language",
            "Brainstorm",
            "Project",
            "Here is my paragraph. Ask me three questions that will make my argument \
             stronger, and suggest one sentence I could revise to sound more precise \
             without changing my meaning.",
            "Frames AI as a coach rather than a ghost-writer by focusing on questions and \
             small revisions instead of full rewrites.",
            &["writing", "feedback"],
            5,
            vec![],
        ),
        entry(
            "c4",
            "Meta-cognitive reflection after AI help",
            Role::Student,
            "Cross-disciplinary",
            "Reflect",
            "Homework",
            "Did I just accept your answer, or did I question and reshape it? Help me write \
             three short sentences about what I decided to keep, change, or reject and why.",
            "Helps students talk about their decisions after using AI, which is central to \
             agency and self-regulation.",
            &["reflection", "agency"],
            2,
            vec![],
        ),
    ]
}

pub const DEFAULT_SUBJECTS: &[&str] = &[
    "Language / Writing",
    "Math",
    "Science",
    "History / Social Studies",
    "Cross-disciplinary",
];

pub const DEFAULT_FUNCTIONS: &[&str] = &["Explain", "Summarize", "Compare", "Brainstorm", "Reflect"];

pub const DEFAULT_SCENARIOS: &[&str] = &["Classwork", "Homework", "Project", "Exam prep"];

pub fn tag_options() -> TagOptions {
    TagOptions {
        subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
        functions: DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
        scenarios: DEFAULT_SCENARIOS.iter().map(|s| s.to_string()).collect(),
    }
}
