// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line interface: `cardpress id ...` and `cardpress certificate ...`.

use std::path::PathBuf;

use cardpress_core::AssetLayout;
use cardpress_core::error::{CardpressError, Result};
use cardpress_core::types::{BackCover, DocumentKind, SubjectRecord, TemplateRef};
use clap::{Args, Parser, Subcommand};

use crate::services::batch::RunMode;

const USAGE_HINT: &str = "Either provide a CSV file with --csv, or the individual arguments --template and --name.";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate ID cards and certificates for volunteers")]
pub struct Cli {
    /// JSON file describing where templates, fonts and profiles live
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a TrueType font for names (overrides the configured font)
    #[arg(long, global = true)]
    pub font_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate ID cards (photo, name, back cover)
    Id(IdArgs),
    /// Generate certificates (name only)
    Certificate(CertificateArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Template name (see the templates directory) or path to a template image
    #[arg(long)]
    pub template: Option<String>,

    /// Name printed on the card
    #[arg(long)]
    pub name: Option<String>,

    /// Path to the profile picture; the placeholder is used when omitted
    #[arg(long)]
    pub profile_pic: Option<PathBuf>,

    /// Path to save the card
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Back cover to append: light or dark (inferred from the template name when omitted)
    #[arg(long)]
    pub back_cover: Option<BackCover>,

    /// Directory to save the cards in batch runs
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// CSV file with template,name,profile-pic columns
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Directory of photos named like first_last.jpg; one card per photo
    #[arg(long)]
    pub photos_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CertificateArgs {
    /// Template name (see the templates directory) or path to a template image
    #[arg(long)]
    pub template: Option<String>,

    /// Name printed on the certificate
    #[arg(long)]
    pub name: Option<String>,

    /// Path to save the certificate
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory to save the certificates in batch runs
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// CSV file with template,name columns
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl Command {
    /// Work out the document kind and run mode from the arguments given.
    ///
    /// `--csv` wins over `--photos-dir`, which wins over a single record.
    pub fn resolve(&self, layout: &AssetLayout) -> Result<(DocumentKind, RunMode)> {
        match self {
            Self::Id(args) => Ok((DocumentKind::IdCard, args.run_mode(layout)?)),
            Self::Certificate(args) => Ok((DocumentKind::Certificate, args.run_mode(layout)?)),
        }
    }
}

impl IdArgs {
    fn run_mode(&self, layout: &AssetLayout) -> Result<RunMode> {
        let batch_dir = || {
            self.output_dir
                .clone()
                .unwrap_or_else(|| layout.default_output_dir(DocumentKind::IdCard))
        };

        if let Some(csv) = &self.csv {
            return Ok(RunMode::Csv {
                path: csv.clone(),
                output_dir: batch_dir(),
            });
        }

        if let Some(photos_dir) = &self.photos_dir {
            let template = self.template.as_ref().ok_or_else(|| {
                CardpressError::InvalidArguments("--photos-dir also needs --template.".into())
            })?;
            return Ok(RunMode::Directory {
                template: TemplateRef::new(template.as_str()),
                photos_dir: photos_dir.clone(),
                output_dir: batch_dir(),
                back_cover: self.back_cover,
            });
        }

        match (&self.template, &self.name) {
            (Some(template), Some(name)) => Ok(RunMode::Single {
                record: SubjectRecord::new(TemplateRef::new(template.as_str()), name.as_str())
                    .with_photo(self.profile_pic.clone())
                    .with_output(self.output.clone())
                    .with_back_cover(self.back_cover),
                output_dir: self.output_dir.clone(),
            }),
            _ => Err(CardpressError::InvalidArguments(format!(
                "{USAGE_HINT} A directory of photos can be given with --photos-dir."
            ))),
        }
    }
}

impl CertificateArgs {
    fn run_mode(&self, layout: &AssetLayout) -> Result<RunMode> {
        if let Some(csv) = &self.csv {
            return Ok(RunMode::Csv {
                path: csv.clone(),
                output_dir: self
                    .output_dir
                    .clone()
                    .unwrap_or_else(|| layout.default_output_dir(DocumentKind::Certificate)),
            });
        }

        match (&self.template, &self.name) {
            (Some(template), Some(name)) => Ok(RunMode::Single {
                record: SubjectRecord::new(TemplateRef::new(template.as_str()), name.as_str())
                    .with_output(self.output.clone()),
                output_dir: self.output_dir.clone(),
            }),
            _ => Err(CardpressError::InvalidArguments(USAGE_HINT.into())),
        }
    }
}
