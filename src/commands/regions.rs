use anyhow::Result;

use crate::formatting::FormattingConfig;
use crate::io::{self, OutputFormat};
use crate::region::REGIONS;

pub fn list_regions(format: OutputFormat, plain: bool) -> Result<()> {
    let formatting = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let mut writer = io::create_writer(format, formatting, io::open_destination(None)?);
    writer.write_regions(&REGIONS)
}
