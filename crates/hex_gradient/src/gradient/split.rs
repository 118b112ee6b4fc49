use crate::color::rgb::Rgb;
use crate::GradientError;

/// How the steps left over after an even division are handed out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SectionSplit {
    /// `remainder = (length - 1) % sections`; every sequence has exactly `length` entries.
    #[default]
    Even,
    /// `remainder = (length - 1) % base`, as the first renderer computed it.
    ///
    /// Only layouts where that arithmetic happens to add up are accepted.
    Legacy,
}

/// Step counts for each section of a gradient of `length` entries.
pub fn section_lengths(
    sections: usize,
    length: usize,
    split: SectionSplit,
) -> Result<Vec<usize>, GradientError> {
    if sections == 0 {
        return Err(GradientError::InsufficientAnchors(sections + 1));
    }
    if length == 0 {
        return Err(GradientError::NonPositiveLength);
    }

    let steps = length - 1;
    let base = steps / sections;
    let remainder = match split {
        SectionSplit::Even => steps % sections,
        // A zero base leaves every section empty.
        SectionSplit::Legacy => steps.checked_rem(base).unwrap_or(0),
    };

    let lengths: Vec<usize> =
        (0..sections).map(|i| if i < remainder { base + 1 } else { base }).collect();

    if lengths.iter().sum::<usize>() != steps {
        return Err(GradientError::LegacySplit { sections, length });
    }

    Ok(lengths)
}

/// Span between two adjacent anchors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub from: Rgb,
    pub to: Rgb,
    pub len: usize,
}

impl Section {
    /// Colors after `from`, ending exactly on `to` when `len > 0`.
    pub fn steps(&self) -> impl Iterator<Item = Rgb> + '_ {
        let len = self.len as f64;
        (1..=self.len).map(move |i| {
            let pct = (self.len - i) as f64 / len;
            self.from.blend(self.to, pct)
        })
    }
}
