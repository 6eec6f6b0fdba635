// ABOUTME: Input binding module for the ds-slides application
// ABOUTME: Maps viewer keyboard events and control actions to navigation transitions

use crate::navigator::Transition;

/// Map a DOM `KeyboardEvent.key` name, forwarded verbatim by the viewer
/// page, to a transition. Unbound keys yield `None` and are ignored.
pub fn transition_for_key(key: &str) -> Option<Transition> {
    match key {
        "ArrowRight" => Some(Transition::Next),
        "ArrowLeft" => Some(Transition::Prev),
        _ => None,
    }
}

/// Map a control action from the navigation bar or the control API to a
/// transition. `goto` requires an index; everything else ignores it.
pub fn transition_for_action(action: &str, index: Option<usize>) -> Option<Transition> {
    match action {
        "next" => Some(Transition::Next),
        "prev" => Some(Transition::Prev),
        "goto" => index.map(Transition::GoTo),
        _ => None,
    }
}
