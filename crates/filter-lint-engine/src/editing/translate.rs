//! Row translation for parse results that survive an edit unchanged.
//!
//! Rows below an edit keep their content but move up or down. Instead of
//! parsing them again, the reprocessor clones them and shifts every range
//! they contain, down to the last token and diagnostic.

use crate::parsing::{
    diagnostics::{Diagnostic, Messages},
    line::{
        ActionRule, ActionValue, AlertSound, Block, Color, FilterRule, FilterValue, Line, LineKind,
        Rule, Unknown,
    },
    position::{Point, Range, Token},
};

pub trait ShiftRows {
    /// Moves every row this value refers to by `delta`.
    fn shift_rows(&mut self, delta: isize);
}

impl ShiftRows for Point {
    fn shift_rows(&mut self, delta: isize) {
        self.row = self.row.saturating_add_signed(delta);
    }
}

impl ShiftRows for Range {
    fn shift_rows(&mut self, delta: isize) {
        self.start.shift_rows(delta);
        self.end.shift_rows(delta);
    }
}

impl<T> ShiftRows for Token<T> {
    fn shift_rows(&mut self, delta: isize) {
        self.range.shift_rows(delta);
    }
}

impl<T: ShiftRows> ShiftRows for Option<T> {
    fn shift_rows(&mut self, delta: isize) {
        if let Some(inner) = self {
            inner.shift_rows(delta);
        }
    }
}

impl<T: ShiftRows> ShiftRows for Vec<T> {
    fn shift_rows(&mut self, delta: isize) {
        for item in self {
            item.shift_rows(delta);
        }
    }
}

impl ShiftRows for Diagnostic {
    fn shift_rows(&mut self, delta: isize) {
        self.range.shift_rows(delta);
    }
}

impl ShiftRows for Messages {
    fn shift_rows(&mut self, delta: isize) {
        self.errors.shift_rows(delta);
        self.warnings.shift_rows(delta);
        self.info.shift_rows(delta);
    }
}

impl ShiftRows for Line {
    fn shift_rows(&mut self, delta: isize) {
        self.range.shift_rows(delta);
        self.messages.shift_rows(delta);
        self.kind.shift_rows(delta);
    }
}

impl ShiftRows for LineKind {
    fn shift_rows(&mut self, delta: isize) {
        match self {
            LineKind::Empty => {}
            LineKind::Comment { text } => text.shift_rows(delta),
            LineKind::Block(block) => block.shift_rows(delta),
            LineKind::Rule(rule) => rule.shift_rows(delta),
            LineKind::Unknown(unknown) => unknown.shift_rows(delta),
        }
    }
}

impl ShiftRows for Block {
    fn shift_rows(&mut self, delta: isize) {
        self.keyword.shift_rows(delta);
        self.trailing_comment.shift_rows(delta);
    }
}

impl ShiftRows for Rule {
    fn shift_rows(&mut self, delta: isize) {
        match self {
            Rule::Filter(rule) => rule.shift_rows(delta),
            Rule::Action(rule) => rule.shift_rows(delta),
        }
    }
}

impl ShiftRows for FilterRule {
    fn shift_rows(&mut self, delta: isize) {
        self.name.shift_rows(delta);
        self.operator.shift_rows(delta);
        self.value.shift_rows(delta);
        self.trailing_comment.shift_rows(delta);
    }
}

impl ShiftRows for FilterValue {
    fn shift_rows(&mut self, delta: isize) {
        match self {
            FilterValue::Number(value) => value.shift_rows(delta),
            FilterValue::Rarity(value) => value.shift_rows(delta),
            FilterValue::SocketGroup(value) => value.shift_rows(delta),
            FilterValue::Boolean(value) => value.shift_rows(delta),
            FilterValue::Strings(values) => values.shift_rows(delta),
        }
    }
}

impl ShiftRows for ActionRule {
    fn shift_rows(&mut self, delta: isize) {
        self.name.shift_rows(delta);
        self.operator.shift_rows(delta);
        self.value.shift_rows(delta);
        self.trailing_comment.shift_rows(delta);
    }
}

impl ShiftRows for ActionValue {
    fn shift_rows(&mut self, delta: isize) {
        match self {
            ActionValue::Color(color) => color.shift_rows(delta),
            ActionValue::Sound(sound) => sound.shift_rows(delta),
            ActionValue::FontSize(size) => size.shift_rows(delta),
            ActionValue::Path(path) => path.shift_rows(delta),
            ActionValue::Flag => {}
        }
    }
}

impl ShiftRows for Color {
    fn shift_rows(&mut self, delta: isize) {
        self.red.shift_rows(delta);
        self.green.shift_rows(delta);
        self.blue.shift_rows(delta);
        self.alpha.shift_rows(delta);
    }
}

impl ShiftRows for AlertSound {
    fn shift_rows(&mut self, delta: isize) {
        self.id.shift_rows(delta);
        self.volume.shift_rows(delta);
    }
}

impl ShiftRows for Unknown {
    fn shift_rows(&mut self, delta: isize) {
        self.keyword.shift_rows(delta);
    }
}
