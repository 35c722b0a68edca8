use chumsky::prelude::*;
use miette::*;

use crate::Height;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ProfileError {
    #[error("pipe {index} has negative height {value}")]
    #[diagnostic(
        code(pipes::profile::negative_height),
        help("pipe heights must be zero or greater")
    )]
    NegativeHeight { index: usize, value: i64 },
    #[error("pipe {index} has height {value}, which does not fit in a pipe height")]
    #[diagnostic(code(pipes::profile::height_out_of_range))]
    HeightOutOfRange { index: usize, value: i64 },
}

/// Pipe heights from left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeightProfile {
    heights: Vec<Height>,
}

impl HeightProfile {
    /// Validates signed heights, stopping at the first one that is not a valid
    /// pipe height.
    pub fn from_signed(values: &[i64]) -> Result<Self, ProfileError> {
        let heights = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                if value < 0 {
                    return Err(ProfileError::NegativeHeight { index, value });
                }
                Height::try_from(value).map_err(|_| ProfileError::HeightOutOfRange { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { heights })
    }

    /// Parses integers separated by commas and/or whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let values = parser()
            .parse(input.trim())
            .into_result()
            .map_err(|e| miette!("Parse failed: {:?}", e))?;

        Ok(Self::from_signed(&values)?)
    }

    pub fn as_slice(&self) -> &[Height] {
        &self.heights
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Height> {
        self.heights.iter()
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Tallest pipe, or `None` for an empty profile.
    pub fn max_height(&self) -> Option<Height> {
        self.heights.iter().copied().max()
    }

    /// The same pipes in right-to-left order.
    pub fn reversed(&self) -> Self {
        Self {
            heights: self.heights.iter().rev().copied().collect(),
        }
    }

    /// Raises every pipe by `offset`, or `None` if a pipe would overflow.
    pub fn shifted(&self, offset: Height) -> Option<Self> {
        let heights = self
            .heights
            .iter()
            .map(|h| h.checked_add(offset))
            .collect::<Option<Vec<_>>>()?;

        Some(Self { heights })
    }
}

impl From<Vec<Height>> for HeightProfile {
    fn from(heights: Vec<Height>) -> Self {
        Self { heights }
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<i64>, extra::Err<Rich<'a, char>>> {
    let height = just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("invalid height `{digits}`: {e}")))
        });

    let separator = one_of(", \t\r\n").repeated().at_least(1);

    height.separated_by(separator).collect().then_ignore(end())
}
