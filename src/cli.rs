use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::WalkOptions;
use crate::models::{Setting, Settings};

pub const INVALID_LEVEL: &str = "Invalid level, must be greater than 0.";

#[derive(Parser, Debug)]
#[command(name = "dirtree", version, args_override_self = true)]
#[command(about = "List directory contents as an indented tree", long_about = None)]
pub struct Cli {
    /// Directories to list (defaults to current directory)
    pub paths: Vec<PathBuf>,

    /// Show hidden files
    #[arg(short = 'a')]
    pub all: bool,

    /// Show the file owner
    #[arg(short = 'u')]
    pub owner: bool,

    /// Show the file group
    #[arg(short = 'g')]
    pub group: bool,

    /// Show the size of each file in bytes
    #[arg(short = 's')]
    pub size: bool,

    /// Show file type and permissions
    #[arg(short = 'p')]
    pub permissions: bool,

    /// Descend only LEVEL directories deep
    #[arg(short = 'L', value_name = "LEVEL", allow_hyphen_values = true)]
    pub level: Option<String>,

    /// Increase log verbosity on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse process arguments, letting `L` sit anywhere inside a short-flag cluster.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn settings(&self) -> Settings {
        [
            (self.all, Setting::ShowHidden),
            (self.owner, Setting::ShowOwner),
            (self.group, Setting::ShowGroup),
            (self.size, Setting::ShowSize),
            (self.permissions, Setting::ShowPermissions),
        ]
        .into_iter()
        .filter_map(|(enabled, setting)| enabled.then_some(setting))
        .collect()
    }

    pub fn max_depth(&self) -> Result<Option<usize>> {
        self.level.as_deref().map(parse_level).transpose()
    }

    pub fn walk_options(&self) -> Result<WalkOptions> {
        Ok(WalkOptions {
            max_depth: self.max_depth()?,
            settings: self.settings(),
        })
    }

    pub fn roots(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }
}

pub fn parse_level(raw: &str) -> Result<usize> {
    match raw.trim().parse::<i64>() {
        Ok(level) if level > 0 => Ok(usize::try_from(level)?),
        _ => bail!(INVALID_LEVEL),
    }
}

/// Short letters clap knows besides `L`; anything else in a cluster is ignored.
const SHORT_FLAGS: &str = "augspvhV";

/// Rewrite short-flag clusters before clap sees them: unknown letters are
/// dropped, and any `L` moves to the end so the level is read from the next
/// argument (`-Lax 2` becomes `-aL 2`). A cluster left empty is removed.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_level = false;

    for (index, arg) in args.into_iter().enumerate() {
        if index == 0 || expect_level {
            expect_level = false;
            normalized.push(arg);
            continue;
        }

        let cluster = arg
            .to_str()
            .filter(|s| s.len() > 1 && s.starts_with('-') && !s.starts_with("--"));
        let Some(cluster) = cluster else {
            normalized.push(arg);
            continue;
        };

        let mut flags: String = cluster[1..]
            .chars()
            .filter(|&c| SHORT_FLAGS.contains(c))
            .collect();
        if cluster.contains('L') {
            flags.push('L');
            expect_level = true;
        }
        if !flags.is_empty() {
            normalized.push(OsString::from(format!("-{flags}")));
        }
    }

    normalized
}
