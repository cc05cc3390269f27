//! Quick start from a previous character

use tracing::info;

use crate::error::BirthError;

use super::ui::{BirthKey, BirthScreen, BirthUi, QuickPrompt};

/// Answer to the quick-start prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickStart {
    Accepted,
    Declined,
    Quit,
}

/// Ask whether to rebuild the previous character.
///
/// The first prompt takes y/n and ignores other keys. After a yes, the
/// second prompt accepts on any key except Escape and Ctrl-X.
pub fn offer_quick_start<U>(ui: &mut U) -> Result<QuickStart, BirthError>
where
    U: BirthUi + ?Sized,
{
    loop {
        ui.draw(&BirthScreen::QuickStart(QuickPrompt::Ask))?;
        match ui.next_key()? {
            BirthKey::Quit => return Ok(QuickStart::Quit),
            BirthKey::Escape | BirthKey::Enter | BirthKey::Char('n' | 'N') => {
                return Ok(QuickStart::Declined);
            }
            BirthKey::Char('y' | 'Y') => break,
            _ => {}
        }
    }

    ui.draw(&BirthScreen::QuickStart(QuickPrompt::Confirm))?;
    let answer = match ui.next_key()? {
        BirthKey::Quit => QuickStart::Quit,
        BirthKey::Escape => QuickStart::Declined,
        _ => QuickStart::Accepted,
    };
    info!(?answer, "quick start");
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::script::ScriptedUi;

    fn answer(keys: &str) -> QuickStart {
        let mut ui = ScriptedUi::from_script(keys).unwrap();
        offer_quick_start(&mut ui).unwrap()
    }

    #[test]
    fn test_yes_then_any_key_accepts() {
        assert_eq!(answer("y <enter>"), QuickStart::Accepted);
        assert_eq!(answer("Y x"), QuickStart::Accepted);
    }

    #[test]
    fn test_declines() {
        assert_eq!(answer("n"), QuickStart::Declined);
        assert_eq!(answer("N"), QuickStart::Declined);
        assert_eq!(answer("<enter>"), QuickStart::Declined);
        assert_eq!(answer("<esc>"), QuickStart::Declined);
        assert_eq!(answer("y <esc>"), QuickStart::Declined);
    }

    #[test]
    fn test_quit_at_either_prompt() {
        assert_eq!(answer("<quit>"), QuickStart::Quit);
        assert_eq!(answer("y <quit>"), QuickStart::Quit);
    }

    #[test]
    fn test_first_prompt_ignores_other_keys() {
        let mut ui = ScriptedUi::from_script("x <up> 7 y z").unwrap();
        assert_eq!(offer_quick_start(&mut ui).unwrap(), QuickStart::Accepted);
        let prompts: Vec<_> = ui
            .screens()
            .iter()
            .map(|s| match s {
                BirthScreen::QuickStart(p) => *p,
                other => panic!("unexpected screen {:?}", other),
            })
            .collect();
        assert_eq!(
            prompts,
            vec![
                QuickPrompt::Ask,
                QuickPrompt::Ask,
                QuickPrompt::Ask,
                QuickPrompt::Ask,
                QuickPrompt::Confirm,
            ]
        );
    }
}
