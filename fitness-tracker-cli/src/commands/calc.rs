use anyhow::Result;
use clap::Args;

use super::run::print_info;
use super::AppContext;
use crate::models::Package;
use crate::runner;

#[derive(Args)]
pub struct CalcCommand {
    /// Workout code (SWM, RUN or WLK)
    code: String,

    /// Positional package values, e.g. "15000 1 75" for RUN
    #[arg(required = true, allow_negative_numbers = true)]
    data: Vec<f64>,
}

impl CalcCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let package = Package::new(self.code, self.data);
        let format = ctx.output_format()?;
        let info = runner::process(&package)?;
        print_info(&info, format)
    }
}
