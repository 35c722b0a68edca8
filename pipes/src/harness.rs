use std::io::{self, BufRead, Write};

use miette::*;
use rand::Rng;

use crate::{algorithm, render, Height, HeightProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Profiles at least this wide are not drawn.
    pub render_width_limit: usize,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            render_width_limit: 120,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Reads `--seed <u64>` and `--render-width <n>` from command line
    /// arguments, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--seed" => {
                    let seed = it.next().ok_or_else(|| miette!("missing argument to `--seed`"))?;
                    config.seed = Some(
                        seed.parse()
                            .into_diagnostic()
                            .wrap_err("bad argument to `--seed`")?,
                    );
                }
                "--render-width" => {
                    let width = it
                        .next()
                        .ok_or_else(|| miette!("missing argument to `--render-width`"))?;
                    config.render_width_limit = width
                        .parse()
                        .into_diagnostic()
                        .wrap_err("bad argument to `--render-width`")?;
                }
                other => bail!("unsupported argument: {other}"),
            }
        }

        Ok(config)
    }
}

/// Accepts integers greater than zero.
pub fn parse_natural(line: &str) -> Option<usize> {
    line.trim().parse().ok().filter(|&n| n > 0)
}

/// Writes `text` and reads lines until `parse` accepts one.
///
/// Returns `Ok(None)` once the input is exhausted.
pub fn prompt<R, W, T>(
    input: &mut R,
    output: &mut W,
    text: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> io::Result<Option<T>>
where
    R: ?Sized + BufRead,
    W: ?Sized + Write,
{
    let mut line = String::new();

    loop {
        output.write_all(text.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if let Some(value) = parse(&line) {
            return Ok(Some(value));
        }
    }
}

/// Builds `width` pipes with heights drawn uniformly from `1..=max_height`.
pub fn random_profile<G>(rng: &mut G, width: usize, max_height: Height) -> HeightProfile
where
    G: ?Sized + Rng,
{
    let max_height = max_height.max(1);
    (0..width)
        .map(|_| rng.gen_range(1..=max_height))
        .collect::<Vec<_>>()
        .into()
}

pub struct Session<R, W, G> {
    input: R,
    output: W,
    rng: G,
    config: SessionConfig,
}

impl<R, W, G> Session<R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(input: R, output: W, rng: G, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            rng,
            config,
        }
    }

    /// Runs rounds until the input is exhausted.
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<usize> {
        let mut rounds: usize = 0;
        while self.round()? {
            rounds += 1;
        }
        tracing::debug!(rounds, "input exhausted");
        Ok(rounds)
    }

    /// Plays one round. Returns `false` when there was no input left.
    pub fn round(&mut self) -> io::Result<bool> {
        let Some(width) = prompt(&mut self.input, &mut self.output, "Width: ", parse_natural)?
        else {
            return Ok(false);
        };
        let Some(max_height) = prompt(&mut self.input, &mut self.output, "Height: ", |line| {
            parse_natural(line).and_then(|n| Height::try_from(n).ok())
        })?
        else {
            return Ok(false);
        };

        let profile = random_profile(&mut self.rng, width, max_height);
        tracing::debug!(width, max_height, "generated profile");

        writeln!(self.output)?;
        if width < self.config.render_width_limit {
            render::render(profile.as_slice(), &mut self.output)?;
        }

        for (algorithm, measurement) in algorithm::compare(profile.as_slice()) {
            writeln!(
                self.output,
                "\n{}\nWater: {}\nIterations: {}",
                algorithm.name, measurement.water, measurement.steps
            )?;
        }
        writeln!(self.output)?;

        Ok(true)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
