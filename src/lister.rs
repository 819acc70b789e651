use anyhow::{Context, Result};
use log::debug;
use std::io::{Read, Write};

use crate::{format::OutputMode, guard::looks_like_object, release::ReleaseResponse};

/// Options controlling a single listing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub mode: OutputMode,
    /// Run the [`looks_like_object`] pre-check and print nothing when it fails.
    pub lenient: bool,
}

/// The rendered output of one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub output: String,
    pub lines: usize,
    /// The input was rejected by the lenient pre-check and never parsed.
    pub rejected: bool,
}

/// Turns a release document into one line per asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetLister {
    options: ListOptions,
}

impl AssetLister {
    pub fn new(options: ListOptions) -> Self {
        Self { options }
    }

    /// Read `input` to the end, render it and write the result to `output`.
    ///
    /// Nothing is written unless the whole document was rendered.
    #[tracing::instrument(skip(self, input, output))]
    pub fn run<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<Listing> {
        let mut bytes = Vec::new();
        input
            .read_to_end(&mut bytes)
            .context("Failed to read standard input")?;
        debug!("Read {} byte(s) of input", bytes.len());

        let text = String::from_utf8(bytes).context("Standard input is not valid UTF-8")?;
        let listing = self.render(&text)?;

        output
            .write_all(listing.output.as_bytes())
            .context("Failed to write to standard output")?;
        output.flush().context("Failed to flush standard output")?;

        Ok(listing)
    }

    /// Render the complete input text.
    #[tracing::instrument(skip(self, text))]
    pub fn render(&self, text: &str) -> Result<Listing> {
        if self.options.lenient && !looks_like_object(text) {
            debug!("Input does not look like a JSON object, printing nothing");
            return Ok(Listing {
                rejected: true,
                ..Default::default()
            });
        }

        let response = ReleaseResponse::parse(text)?;
        debug!(
            "Rendering {} asset(s) in {} mode",
            response.assets.len(),
            self.options.mode
        );

        let mut output = String::new();
        for asset in &response.assets {
            self.options
                .mode
                .write_line(&mut output, asset)
                .context("Failed to format asset")?;
        }

        Ok(Listing {
            output,
            lines: response.assets.len(),
            rejected: false,
        })
    }
}
