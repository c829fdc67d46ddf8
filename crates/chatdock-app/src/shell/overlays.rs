//! Info popup and profile dropdown.

use tracing::debug;

use chatdock_common::{Point, Rect, Size, StateEvent};

use super::core::WidgetShell;
use super::types::{INFO_POPUP_OFFSET, INFO_POPUP_SIZE};

impl WidgetShell {
    /// Avatar click. Needs an open panel and an active profile to describe.
    pub fn open_info_popup(&mut self) {
        if !self.is_open || self.store.active_profile().is_none() {
            return;
        }
        self.set_info_popup(true);
    }

    pub fn close_info_popup(&mut self) {
        self.set_info_popup(false);
    }

    /// Where the popup is drawn, while it is showing.
    pub fn info_popup_rect(&self) -> Option<Rect> {
        if !self.is_open || !self.is_info_popup_open {
            return None;
        }
        let panel = self.geometry?.rect();
        let origin = Point::new(panel.x + INFO_POPUP_OFFSET.x, panel.y + INFO_POPUP_OFFSET.y);
        let width = INFO_POPUP_SIZE
            .width
            .min((panel.width - 2.0 * INFO_POPUP_OFFSET.x).max(0.0));
        Some(Rect::from_parts(origin, Size::new(width, INFO_POPUP_SIZE.height)))
    }

    /// Pointer press anywhere on the page. Dismisses the popup when the
    /// press lands outside it; does nothing while the popup is not showing.
    pub fn pointer_down(&mut self, point: Point) {
        let Some(rect) = self.info_popup_rect() else {
            return;
        };
        if !rect.contains(point) {
            debug!(x = point.x, y = point.y, "outside click dismissed info popup");
            self.set_info_popup(false);
        }
    }

    /// Chevron click.
    pub fn toggle_dropdown(&mut self) {
        if !self.is_open {
            return;
        }
        self.set_dropdown(!self.is_profile_dropdown_open);
    }

    /// Dropdown entry click. A real switch closes the dropdown and notifies
    /// the backend; choosing the active profile changes nothing.
    pub fn select_profile(&mut self, title: &str) {
        let Some(switch) = self.store.select(title) else {
            return;
        };
        self.set_dropdown(false);
        self.spawn_switch_notify(switch);
    }

    pub(super) fn set_info_popup(&mut self, open: bool) {
        if self.is_info_popup_open != open {
            self.is_info_popup_open = open;
            self.events.publish(StateEvent::InfoPopupChanged(open));
        }
    }

    pub(super) fn set_dropdown(&mut self, open: bool) {
        if self.is_profile_dropdown_open != open {
            self.is_profile_dropdown_open = open;
            self.events.publish(StateEvent::DropdownChanged(open));
        }
    }
}
