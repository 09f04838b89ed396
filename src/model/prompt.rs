use crate::web::models::Turn;

/// Persona instructions placed ahead of every transcript.
pub const TINA_PERSONA: &str = r#"You are Tina, a helpful and friendly virtual insurance consultant.

Start every session by saying:
"I’m Tina. I help you choose the right car insurance policy. May I ask you a few personal questions to make sure I recommend the best policy for you?"

Only continue if the user agrees.

Ask thoughtful questions to understand their situation — such as what kind of vehicle they drive, the vehicle's age, and whether they want coverage for their car or others'.

You will later recommend from:
1. Mechanical Breakdown Insurance (MBI) – Not available for trucks or racing cars.
2. Comprehensive Insurance – Only for vehicles under 10 years old.
3. Third Party Insurance – Available to everyone.

Only recommend based on their answers. Never ask "Which product do you want?". End with your best recommendation and explain your reasoning."#;

/// Cue appended after the transcript so the model answers as the persona.
pub const CONTINUATION_CUE: &str = "Tina:";

/// Renders the transcript into the single prompt sent to the model.
pub fn render_prompt(history: &[Turn]) -> String {
    let transcript = history
        .iter()
        .map(|turn| format!("{}: {}", turn.speaker, turn.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\nConversation so far:\n{}\n{}",
        TINA_PERSONA, transcript, CONTINUATION_CUE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(speaker: &str, text: &str) -> Turn {
        Turn {
            speaker: speaker.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn single_turn_ends_with_continuation_cue() {
        let prompt = render_prompt(&[turn("user", "Hi")]);
        assert!(prompt.starts_with(TINA_PERSONA));
        assert!(prompt.ends_with("user: Hi\nTina:"));
    }

    #[test]
    fn turns_are_rendered_in_order() {
        let history = vec![
            turn("Tina", "I’m Tina. May I ask you a few questions?"),
            turn("user", "Sure"),
            turn("Tina", "What do you drive?"),
            turn("user", "A 2019 hatchback"),
        ];
        let prompt = render_prompt(&history);

        let expected = "Conversation so far:\n\
                        Tina: I’m Tina. May I ask you a few questions?\n\
                        user: Sure\n\
                        Tina: What do you drive?\n\
                        user: A 2019 hatchback\n\
                        Tina:";
        assert!(prompt.ends_with(expected), "prompt was: {}", prompt);
    }

    #[test]
    fn empty_transcript_still_carries_persona() {
        let prompt = render_prompt(&[]);
        assert_eq!(
            prompt,
            format!("{}\n\nConversation so far:\n\nTina:", TINA_PERSONA)
        );
    }

    #[test]
    fn persona_names_products_and_eligibility() {
        assert!(TINA_PERSONA.contains("Mechanical Breakdown Insurance (MBI)"));
        assert!(TINA_PERSONA.contains("Not available for trucks or racing cars"));
        assert!(TINA_PERSONA.contains("Only for vehicles under 10 years old"));
        assert!(TINA_PERSONA.contains("Third Party Insurance – Available to everyone"));
    }

    #[test]
    fn text_is_passed_through_untouched() {
        let prompt = render_prompt(&[turn("user", "line one\nline two: {braces}")]);
        assert!(prompt.ends_with("user: line one\nline two: {braces}\nTina:"));
    }
}
