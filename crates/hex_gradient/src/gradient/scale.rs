use super::sequence::Gradient;
use crate::color::rgb::Rgb;
use crate::GradientError;

/// Number of entries in a score scale, one per score in `0..=100`.
pub const SCORE_LEVELS: usize = 101;

pub const MAX_SCORE: u8 = (SCORE_LEVELS - 1) as u8;

/// Built-in anchor lists.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Red through dark gray to green.
    Ranking,
    /// Red through white to green.
    Traffic,
    Grayscale,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Ranking, Preset::Traffic, Preset::Grayscale];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Ranking => "ranking",
            Preset::Traffic => "traffic",
            Preset::Grayscale => "grayscale",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    pub fn anchors(self) -> &'static [Rgb] {
        static RANKING: [Rgb; 3] =
            [Rgb::new(0xcc, 0, 0), Rgb::new(0x22, 0x22, 0x22), Rgb::new(0, 0xcc, 0)];
        static TRAFFIC: [Rgb; 3] =
            [Rgb::new(0xff, 0, 0), Rgb::new(0xff, 0xff, 0xff), Rgb::new(0, 0x88, 0)];
        static GRAYSCALE: [Rgb; 2] = [Rgb::new(0, 0, 0), Rgb::new(0xff, 0xff, 0xff)];

        match self {
            Preset::Ranking => &RANKING,
            Preset::Traffic => &TRAFFIC,
            Preset::Grayscale => &GRAYSCALE,
        }
    }

    pub fn gradient(self) -> Result<Gradient, GradientError> {
        Gradient::new(self.anchors().to_vec())
    }

    pub fn scale(self) -> Result<ScoreScale, GradientError> {
        ScoreScale::new(&self.gradient()?)
    }
}

/// Lookup table mapping an integer percentile score to a color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreScale {
    colors: Vec<Rgb>,
}

impl ScoreScale {
    pub fn new(gradient: &Gradient) -> Result<Self, GradientError> {
        Ok(Self { colors: gradient.colors(SCORE_LEVELS)? })
    }

    pub fn ranking() -> Result<Self, GradientError> {
        Preset::Ranking.scale()
    }

    /// Scores above 100 saturate.
    pub fn color_for(&self, score: u8) -> Rgb {
        self.colors[usize::from(score.min(MAX_SCORE))]
    }

    pub fn hex_for(&self, score: u8) -> String {
        self.color_for(score).to_string()
    }

    /// Scores at either end of the scale are highlighted by table views.
    pub fn is_extreme(score: u8) -> bool {
        score == 0 || score >= MAX_SCORE
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_scale_lookup() {
        let scale = ScoreScale::ranking().unwrap();
        assert_eq!(scale.colors().len(), SCORE_LEVELS);
        assert_eq!(scale.hex_for(0), "#cc0000");
        assert_eq!(scale.hex_for(10), "#aa0606");
        assert_eq!(scale.hex_for(50), "#222222");
        assert_eq!(scale.hex_for(90), "#06aa06");
        assert_eq!(scale.hex_for(100), "#00cc00");
    }

    #[test]
    fn scores_above_range_saturate() {
        let scale = Preset::Grayscale.scale().unwrap();
        assert_eq!(scale.color_for(101), scale.color_for(100));
        assert_eq!(scale.color_for(u8::MAX), Rgb::new(255, 255, 255));
    }

    #[test]
    fn extremes() {
        assert!(ScoreScale::is_extreme(0));
        assert!(ScoreScale::is_extreme(100));
        assert!(!ScoreScale::is_extreme(1));
        assert!(!ScoreScale::is_extreme(99));
    }

    #[test]
    fn preset_names() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
            assert_eq!(preset.gradient().unwrap().anchors(), preset.anchors());
        }
        assert_eq!(Preset::from_name("TRAFFIC"), Some(Preset::Traffic));
        assert_eq!(Preset::from_name("ocean"), None);
    }

    #[test]
    fn preset_anchors_match_their_hex_spelling() {
        let traffic = Gradient::parse(["#f00", "#fff", "#080"]).unwrap();
        assert_eq!(Preset::Traffic.gradient().unwrap(), traffic);

        let ranking = Gradient::parse(["#c00", "#222", "#0c0"]).unwrap();
        assert_eq!(Preset::Ranking.gradient().unwrap(), ranking);
    }

    #[test]
    fn custom_gradient_scale() {
        let gradient = Gradient::parse(["#000", "#fff"]).unwrap();
        let scale = ScoreScale::new(&gradient).unwrap();
        assert_eq!(scale.hex_for(0), "#000000");
        assert_eq!(scale.hex_for(100), "#ffffff");
    }
}
