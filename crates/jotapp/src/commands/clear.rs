use crate::commands::{CmdResult, FormState};
use crate::session::EditingSession;

pub fn run(session: &mut EditingSession) -> CmdResult {
    session.clear();
    CmdResult::default().with_form(FormState::blank(session))
}
