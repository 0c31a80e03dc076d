/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of apex-tuner.
 *
 * apex-tuner is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * apex-tuner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with apex-tuner. If not, see <https://www.gnu.org/licenses/>.
 */

use crate::track::Track;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Panel {
    Tracks,
    Suspension,
    Aerodynamics,
    Tires,
    Brakes,
    Transmission,
    Ballast
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Tracks => "tracks",
            Panel::Suspension => "suspension",
            Panel::Aerodynamics => "aerodynamics",
            Panel::Tires => "tires",
            Panel::Brakes => "brakes",
            Panel::Transmission => "transmission",
            Panel::Ballast => "ballast"
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    // None means "host default"; expiry itself is the host's concern.
    pub duration_ms: Option<u64>
}

// Ephemeral selection state for the hosting UI. Deliberately thin: it holds
// what's selected and what toasts are pending, nothing more.
#[derive(Debug)]
pub struct UiState {
    active_panel: Panel,
    selected_track: Option<Track>,
    show_tutorial: bool,
    tutorial_step: u32,
    is_loading: bool,
    notifications: Vec<Notification>,
    next_notification_id: u64
}

impl UiState {
    pub fn new() -> UiState {
        UiState {
            active_panel: Panel::Tracks,
            selected_track: None,
            show_tutorial: false,
            tutorial_step: 0,
            is_loading: false,
            notifications: Vec::new(),
            next_notification_id: 0
        }
    }

    pub fn active_panel(&self) -> Panel {
        self.active_panel
    }

    pub fn set_active_panel(&mut self, panel: Panel) {
        self.active_panel = panel;
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.selected_track.as_ref()
    }

    pub fn select_track(&mut self, track: Option<Track>) {
        self.selected_track = track;
    }

    pub fn show_tutorial(&self) -> bool {
        self.show_tutorial
    }

    pub fn set_show_tutorial(&mut self, show: bool) {
        self.show_tutorial = show;
    }

    pub fn tutorial_step(&self) -> u32 {
        self.tutorial_step
    }

    pub fn set_tutorial_step(&mut self, step: u32) {
        self.tutorial_step = step;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn notifications(&self) -> &Vec<Notification> {
        &self.notifications
    }

    pub fn add_notification(&mut self,
                            kind: NotificationKind,
                            title: &str,
                            message: &str,
                            duration_ms: Option<u64>) -> u64 {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification {
            id,
            kind,
            title: String::from(title),
            message: String::from(message),
            duration_ms
        });
        id
    }

    pub fn remove_notification(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}

impl Default for UiState {
    fn default() -> Self {
        UiState::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::track::find_track;
    use crate::ui::{NotificationKind, Panel, UiState};

    #[test]
    fn defaults_to_tracks_panel() {
        let ui = UiState::new();
        assert_eq!(ui.active_panel(), Panel::Tracks);
        assert!(ui.selected_track().is_none());
        assert!(!ui.is_loading());
        assert!(ui.notifications().is_empty());
    }

    #[test]
    fn track_selection() {
        let mut ui = UiState::new();
        ui.select_track(Some(*find_track("spa").unwrap()));
        assert_eq!(ui.selected_track().unwrap().id, "spa");
        ui.select_track(None);
        assert!(ui.selected_track().is_none());
    }

    #[test]
    fn notification_ids_are_unique_and_removable() {
        let mut ui = UiState::new();
        let first = ui.add_notification(NotificationKind::Success, "Saved", "Setup saved", None);
        let second = ui.add_notification(NotificationKind::Warning, "Careful", "Out of range", Some(3000));
        assert_ne!(first, second);
        assert_eq!(ui.notifications().len(), 2);

        assert!(ui.remove_notification(first));
        assert!(!ui.remove_notification(first));
        assert_eq!(ui.notifications().len(), 1);
        assert_eq!(ui.notifications()[0].id, second);

        ui.clear_notifications();
        assert!(ui.notifications().is_empty());
    }
}
