use sea_orm_migration::prelude::*;
use migration::Migrator;

// `DATABASE_URL=... cargo run -p migration -- up|down|fresh|status`
#[async_std::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
