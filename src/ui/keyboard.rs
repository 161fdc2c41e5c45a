//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Solange ein Textfeld den Fokus hat, werden keine Shortcuts ausgewertet.

use crate::app::AppIntent;
use crate::core::EntityKind;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Einzeltasten nur ohne Cmd/Ctrl
    if modifiers.command {
        return events;
    }

    let (
        key_d_pressed,
        key_escape_pressed,
        key_p_pressed,
        key_c_pressed,
        key_f_pressed,
        key_s_pressed,
        key_e_pressed,
        key_del_pressed,
    ) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::D),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::P),
            i.key_pressed(egui::Key::C),
            i.key_pressed(egui::Key::F),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::X)
                || i.key_pressed(egui::Key::Delete)
                || i.key_pressed(egui::Key::Backspace),
        )
    });

    if key_d_pressed || key_escape_pressed {
        events.push(AppIntent::DeselectAllRequested);
    }

    // Zyklus: p/c ersetzen die Selektion, Shift+f sammelt Forcefields
    if key_p_pressed {
        events.push(AppIntent::SelectNextRequested {
            kind: EntityKind::Point,
            additive: false,
        });
    }
    if key_c_pressed {
        events.push(AppIntent::SelectNextRequested {
            kind: EntityKind::Connection,
            additive: false,
        });
    }
    if key_f_pressed {
        events.push(AppIntent::SelectNextRequested {
            kind: EntityKind::Forcefield,
            additive: modifiers.shift,
        });
    }

    if key_s_pressed {
        events.push(AppIntent::ApplyForceRequested);
    }

    if key_e_pressed {
        events.push(AppIntent::ToggleForcefieldEditRequested);
    }

    if key_del_pressed {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    events
}
