//! Translates winit mouse events into tictac [`Msg`] values.

use log::debug;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

use tictac_core::messages::{MouseAction, Msg};

use crate::layout::Layout;

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

fn button_action(btn_state: ElementState, button: MouseButton) -> Option<MouseAction> {
    Some(match btn_state {
        ElementState::Pressed => match button {
            MouseButton::Left => MouseAction::Main,
            MouseButton::Right => MouseAction::Secondary,
            MouseButton::Middle => MouseAction::Auxiliary,
            _ => return None,
        },
        ElementState::Released => MouseAction::Release,
    })
}

/// Button events carry no position, so the caller passes the last cursor
/// position seen. A press before the first `CursorMoved` (the window opened
/// under a still pointer) has no cell to land on and is dropped.
pub(crate) fn translate_mouse_button(
    btn_state: ElementState,
    button: MouseButton,
    cursor: Option<PhysicalPosition<f64>>,
    layout: &Layout,
) -> Option<Msg> {
    let action = button_action(btn_state, button)?;
    let Some(cursor) = cursor else {
        debug!("{action:?} dropped: no cursor position yet");
        return None;
    };
    Some(Msg::mouse(action, layout.cell_at(cursor.x, cursor.y)))
}

pub(crate) fn translate_cursor_moved(position: PhysicalPosition<f64>, layout: &Layout) -> Msg {
    Msg::mouse(MouseAction::Move, layout.cell_at(position.x, position.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::Point;

    fn layout() -> Layout {
        Layout::new(800, 600, 3)
    }

    #[test]
    fn left_press_becomes_main_click_on_cell() {
        let msg = translate_mouse_button(
            ElementState::Pressed,
            MouseButton::Left,
            Some(PhysicalPosition::new(420.0, 510.0)),
            &layout(),
        );
        match msg {
            Some(Msg::Mouse { action, pos, .. }) => {
                assert_eq!(action, MouseAction::Main);
                assert_eq!(pos, Point::at(2, 1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn release_and_other_buttons() {
        let at = Some(PhysicalPosition::new(1.0, 1.0));
        let msg = translate_mouse_button(ElementState::Released, MouseButton::Left, at, &layout());
        assert!(matches!(
            msg,
            Some(Msg::Mouse {
                action: MouseAction::Release,
                ..
            })
        ));
        let msg = translate_mouse_button(ElementState::Pressed, MouseButton::Back, at, &layout());
        assert!(msg.is_none());
    }

    #[test]
    fn press_before_any_cursor_motion_is_dropped() {
        let l = layout();
        assert_eq!(translate_mouse_button(ElementState::Pressed, MouseButton::Left, None, &l), None);
        assert_eq!(translate_mouse_button(ElementState::Pressed, MouseButton::Right, None, &l), None);

        // The first motion makes the next press land.
        let cursor = Some(PhysicalPosition::new(10.0, 10.0));
        assert_eq!(
            translate_mouse_button(ElementState::Pressed, MouseButton::Left, cursor, &l),
            Some(Msg::mouse(MouseAction::Main, Point::at(0, 0)))
        );
    }

    #[test]
    fn cursor_motion_is_clamped() {
        match translate_cursor_moved(PhysicalPosition::new(-10.0, 9000.0), &layout()) {
            Msg::Mouse { action, pos, .. } => {
                assert_eq!(action, MouseAction::Move);
                assert_eq!(pos, Point::at(2, 0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
