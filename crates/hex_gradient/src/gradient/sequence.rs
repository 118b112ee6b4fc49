use log::{debug, trace};

use super::split::{section_lengths, Section, SectionSplit};
use crate::color::rgb::Rgb;
use crate::GradientError;

/// Ordered anchor colors interpolated into fixed-length sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    anchors: Vec<Rgb>,
    split: SectionSplit,
}

impl Gradient {
    pub fn new(anchors: Vec<Rgb>) -> Result<Self, GradientError> {
        if anchors.len() < 2 {
            return Err(GradientError::InsufficientAnchors(anchors.len()));
        }
        Ok(Self { anchors, split: SectionSplit::default() })
    }

    /// Parse anchors from hex strings such as `#c00` or `00cc00`.
    pub fn parse<I, S>(anchors: I) -> Result<Self, GradientError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let anchors = anchors
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                let input = input.as_ref();
                input.parse::<Rgb>().map_err(|source| GradientError::InvalidHexFormat {
                    index,
                    input: input.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(anchors)
    }

    pub fn with_split(mut self, split: SectionSplit) -> Self {
        self.split = split;
        self
    }

    pub fn anchors(&self) -> &[Rgb] {
        &self.anchors
    }

    pub fn split(&self) -> SectionSplit {
        self.split
    }

    pub fn sections(&self, length: usize) -> Result<Vec<Section>, GradientError> {
        let lengths = section_lengths(self.anchors.len() - 1, length, self.split)?;
        debug!("Gradient of {} entries over {} sections: {:?}", length, lengths.len(), lengths);

        Ok(self
            .anchors
            .windows(2)
            .zip(lengths)
            .map(|(pair, len)| Section { from: pair[0], to: pair[1], len })
            .collect())
    }

    /// Exactly `length` colors, starting on the first anchor.
    pub fn colors(&self, length: usize) -> Result<Vec<Rgb>, GradientError> {
        let sections = self.sections(length)?;

        let mut colors = Vec::with_capacity(length);
        colors.push(self.anchors[0]);
        for section in &sections {
            trace!("Section {} -> {} in {} steps", section.from, section.to, section.len);
            colors.extend(section.steps());
        }

        debug_assert_eq!(colors.len(), length);
        Ok(colors)
    }

    pub fn hex_sequence(&self, length: usize) -> Result<Vec<String>, GradientError> {
        Ok(self.colors(length)?.into_iter().map(|color| color.to_string()).collect())
    }
}

/// Interpolate `length` hex colors through `anchors`.
pub fn generate<S: AsRef<str>>(anchors: &[S], length: usize) -> Result<Vec<String>, GradientError> {
    Gradient::parse(anchors)?.hex_sequence(length)
}
