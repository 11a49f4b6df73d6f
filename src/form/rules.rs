//! The ordered form rules.
//!
//! Rules are tried top to bottom and the first one that returns a form
//! wins. A rule that does not apply returns `None`, which lets later rules
//! see the poem (a five-line poem that is neither tetractys, limerick, tanka
//! nor cinquain can still be blank verse).

use super::Form;
use crate::template::tables::{metre, rhyme};

/// Everything the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct Features<'a> {
    /// Syllables per non-blank line
    pub lengths: &'a [usize],
    /// Guessed metre name
    pub metre: &'a str,
    /// Guessed rhyme-type name
    pub rhyme: &'a str,
}

impl Features<'_> {
    /// Number of non-blank lines.
    pub fn line_count(&self) -> usize {
        self.lengths.len()
    }
}

/// A rule: a form when it applies, `None` otherwise.
pub type Rule = fn(&Features<'_>) -> Option<Form>;

/// A named entry of [`FORM_RULES`].
#[derive(Clone, Copy)]
pub struct FormRule {
    /// Name used in logs
    pub name: &'static str,
    /// The check itself
    pub apply: Rule,
}

/// Form rules in evaluation order.
pub static FORM_RULES: &[FormRule] = &[
    FormRule { name: "haiku", apply: haiku },
    FormRule { name: "five lines", apply: five_lines },
    FormRule { name: "ottava rima", apply: ottava_rima },
    FormRule { name: "sonnet", apply: sonnet },
    FormRule { name: "rondeau", apply: rondeau },
    FormRule { name: "ballad stanza", apply: ballad_stanza },
    FormRule { name: "heroic couplets", apply: heroic_couplets },
    FormRule { name: "blank verse", apply: blank_verse },
];

const HAIKU: &[(usize, usize)] = &[(4, 6), (6, 8), (4, 6)];
const TETRACTYS: &[usize] = &[1, 2, 3, 4, 10];
const LIMERICK: &[(usize, usize)] = &[(8, 11), (8, 11), (5, 7), (5, 7), (8, 11)];
const TANKA: &[(usize, usize)] = &[(4, 6), (6, 8), (4, 6), (6, 8), (6, 8)];
const OTTAVA_RIMA_LINE: (usize, usize) = (10, 12);

/// Evaluate [`FORM_RULES`] in order, falling back to [`Form::Unknown`].
pub fn apply_rules(features: &Features<'_>) -> Form {
    for rule in FORM_RULES {
        if let Some(form) = (rule.apply)(features) {
            tracing::debug!(rule = rule.name, form = %form, "form rule matched");
            return form;
        }
    }
    Form::Unknown
}

fn within(lengths: &[usize], ranges: &[(usize, usize)]) -> bool {
    lengths.len() == ranges.len()
        && lengths
            .iter()
            .zip(ranges)
            .all(|(&len, &(low, high))| (low..=high).contains(&len))
}

fn haiku(f: &Features<'_>) -> Option<Form> {
    within(f.lengths, HAIKU).then_some(Form::Haiku)
}

fn five_lines(f: &Features<'_>) -> Option<Form> {
    if f.line_count() != 5 {
        return None;
    }
    if f.lengths == TETRACTYS {
        Some(Form::Tetractys)
    } else if within(f.lengths, LIMERICK) {
        Some(Form::Limerick)
    } else if within(f.lengths, TANKA) {
        Some(Form::Tanka)
    } else if f.rhyme == rhyme::NO_RHYME {
        Some(Form::Cinquain)
    } else {
        None
    }
}

fn ottava_rima(f: &Features<'_>) -> Option<Form> {
    let (low, high) = OTTAVA_RIMA_LINE;
    (f.line_count() == 8
        && f.lengths.iter().all(|len| (low..=high).contains(len))
        && f.rhyme == rhyme::RIMA)
        .then_some(Form::OttavaRima)
}

fn sonnet(f: &Features<'_>) -> Option<Form> {
    if f.line_count() != 14 {
        return None;
    }
    let shakespearean = (f.metre == metre::IAMBIC_PENTAMETER
        && f.rhyme == rhyme::SHAKESPEAREAN_SONNET)
        || f.rhyme == rhyme::ALTERNATE;
    if shakespearean {
        Some(Form::ShakespeareanSonnet)
    } else {
        Some(Form::Sonnet {
            metre: f.metre.to_string(),
        })
    }
}

fn rondeau(f: &Features<'_>) -> Option<Form> {
    (f.line_count() == 15).then_some(Form::Rondeau)
}

fn ballad_stanza(f: &Features<'_>) -> Option<Form> {
    (f.rhyme == rhyme::ALTERNATE && f.metre == metre::IAMBIC_TETRAMETER)
        .then_some(Form::BalladStanza)
}

fn heroic_couplets(f: &Features<'_>) -> Option<Form> {
    (f.rhyme == rhyme::COUPLETS && f.metre == metre::IAMBIC_PENTAMETER)
        .then_some(Form::HeroicCouplets)
}

fn blank_verse(f: &Features<'_>) -> Option<Form> {
    (f.metre == metre::IAMBIC_PENTAMETER).then_some(Form::BlankVerse)
}
