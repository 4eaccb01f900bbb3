use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::ui::query::{SortField, SortOrder, SortSpec};
use crate::ui::Presets;

#[derive(Debug, Parser)]
#[command(
    name = "product-browser",
    version,
    about = "Browse a remote product catalog in the terminal"
)]
pub struct Cli {
    /// Config file (default: <config dir>/product-browser/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the product listing endpoint
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Override the number of rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Initial search term (matches titles, case-insensitive)
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Initial sort
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Print one page to stdout instead of starting the interactive view
    #[arg(long)]
    pub print: bool,

    /// Page to print with --print
    #[arg(long, default_value_t = 1, requires = "print")]
    pub page: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl From<SortArg> for SortSpec {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::PriceAsc => SortSpec::new(SortField::Price, SortOrder::Asc),
            SortArg::PriceDesc => SortSpec::new(SortField::Price, SortOrder::Desc),
            SortArg::NameAsc => SortSpec::new(SortField::Name, SortOrder::Asc),
            SortArg::NameDesc => SortSpec::new(SortField::Name, SortOrder::Desc),
        }
    }
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Command-line values win over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.view.page_size = page_size;
        }
    }

    pub fn presets(&self) -> Presets {
        Presets {
            search: self.search.clone(),
            sort: self.sort.map(SortSpec::from),
        }
    }
}
