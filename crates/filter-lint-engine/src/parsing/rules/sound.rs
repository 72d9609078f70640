//! Audio actions: `PlayAlertSound`, `PlayAlertSoundPositional`,
//! `CustomAlertSound` and `DisableDropSound`.

use super::{Bounds, Outcome, RuleParser};
use crate::parsing::{
    line::{AlertSound, SoundId},
    position::Token,
};

pub const SOUND_NUMBER: Bounds = Bounds::Range(1, 16);
pub const VOLUME: Bounds = Bounds::Range(0, 300);

/// `Keyword [=] <id> [<volume>]` where `id` is a named sound or 1 to 16.
pub fn alert_sound(mut p: RuleParser<'_, '_>) -> Outcome<Option<AlertSound>> {
    p.equality_operator();

    let id = if let Some(number) = p.tok.next_number() {
        p.bounded::<u8>(number, SOUND_NUMBER)
            .map(|t| t.map(SoundId::Numbered))
    } else if let Some(name) = p.tok.next_string() {
        if p.data().is_sound(&name.value) {
            Some(name.map(SoundId::Named))
        } else {
            p.error(
                format!(
                    "Invalid value for rule {}. \"{}\" is not a known sound.",
                    p.keyword(),
                    name.value
                ),
                name.range,
            );
            None
        }
    } else {
        let range = p.tok.rest_of_line();
        p.error("Invalid format. Expected a sound name or number.", range);
        return p.abort(None);
    };

    let volume = p.tok.next_number().map(|n| p.bounded::<u16>(n, VOLUME));

    let sound = match (id, volume) {
        (Some(id), None) => Some(AlertSound { id, volume: None }),
        (Some(id), Some(Some(volume))) => Some(AlertSound {
            id,
            volume: Some(volume),
        }),
        _ => None,
    };
    p.finish(sound)
}

/// `CustomAlertSound [=] "<path>"`
pub fn custom_alert_sound(mut p: RuleParser<'_, '_>) -> Outcome<Option<Token<String>>> {
    p.equality_operator();
    let Some(path) = p.require_string() else {
        return p.abort(None);
    };
    if path.value.trim().is_empty() {
        p.error("Invalid value for rule CustomAlertSound. Expected a sound file path.", path.range);
        return p.finish(None);
    }
    p.finish(Some(path))
}

/// `DisableDropSound` takes nothing.
pub fn disable_drop_sound(mut p: RuleParser<'_, '_>) -> Outcome<()> {
    p.no_operator();
    p.finish(())
}
