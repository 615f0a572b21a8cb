//! The canned coach reply: a fixed intro followed by a randomly picked
//! revision tip. Deliberately not a real model call.

use rand::seq::SliceRandom;

const INTRO: &str = "Thanks for sharing this prompt. I will answer briefly, then suggest how \
     you might revise the prompt to keep you in control of the thinking.\n\n";

pub const TIPS: &[&str] = &[
    "You could add: “Ask me questions first, then give suggestions.”",
    "Try asking the AI to explain its reasoning step by step so you can compare it with \
     your own.",
    "You might finish with: “Before answering, summarize what you think I am trying to do.”",
    "Consider asking the AI to give two options and ask which one you prefer and why.",
    "You can invite the AI to highlight what you could change rather than rewriting \
     everything.",
];

/// Reply to a chat message. The student's text is ignored on purpose; the
/// reply only ever coaches on prompt revision.
pub fn reply(_user_text: &str) -> String {
    let mut rng = rand::thread_rng();
    reply_with(&mut rng)
}

pub fn reply_with<R: rand::Rng + ?Sized>(rng: &mut R) -> String {
    let tip = TIPS.choose(rng).expect("tip table is non-empty");
    format!("{}{}", INTRO, tip)
}
