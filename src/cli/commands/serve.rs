//! movie-cards serve - Run the HTTP service

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::config::parse_addr;
use crate::error::Result;
use crate::server::{self, AppState};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides server.addr)
    #[arg(long, env = "MOVIE_CARDS_ADDR")]
    pub addr: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ServeArgs) -> Result<()> {
    let addr = match &args.addr {
        Some(raw) => parse_addr(raw)?,
        None => ctx.config.socket_addr()?,
    };
    debug!(%addr, sample_size = ctx.config.sampling.size, "starting server");

    let state = AppState::new(ctx.catalog.clone(), ctx.config.sampling.size);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(addr, state))
}
