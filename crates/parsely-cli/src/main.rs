/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use parsely_client::ParselyClient;

mod commands;
use commands::{
  analytics::{AnalyticsCommand, MetaDetailCommand, PostDetailCommand},
  content::{RealtimeCommand, RelatedCommand, SearchCommand, SharesCommand},
  referrers::{
    ReferrersCommand, ReferrersMetaCommand, ReferrersMetaDetailCommand, ReferrersPostDetailCommand,
  },
  user::{HistoryCommand, TrainCommand},
};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "parsely")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[command(flatten)]
  credentials: config::CredentialArgs,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Top posts, authors, sections, topics or tags
  Analytics(AnalyticsCommand),
  /// One post's record
  PostDetail(PostDetailCommand),
  /// Posts for one author, section, topic or tag
  MetaDetail(MetaDetailCommand),
  /// Top referrers of one type
  Referrers(ReferrersCommand),
  /// Top records among traffic from one referrer type
  ReferrersMeta(ReferrersMetaCommand),
  /// Posts of one meta value ranked by referred traffic
  ReferrersMetaDetail(ReferrersMetaDetailCommand),
  /// Referrers of a single post
  ReferrersPostDetail(ReferrersPostDetailCommand),
  /// Social shares by aspect or for one post
  Shares(SharesCommand),
  /// Records ranked by traffic in a trailing window
  Realtime(RealtimeCommand),
  /// Posts related to a URL or recommended for a user
  Related(RelatedCommand),
  /// Full-text search
  Search(SearchCommand),
  /// Record that a user viewed a URL
  Train(TrainCommand),
  /// URLs a user has viewed
  History(HistoryCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  // Build the client
  let config = config::load(&cli.credentials)?;
  let client = ParselyClient::new(config)?;

  // Execute command
  match cli.command {
    Commands::Analytics(cmd) => cmd.execute(&client).await?,
    Commands::PostDetail(cmd) => cmd.execute(&client).await?,
    Commands::MetaDetail(cmd) => cmd.execute(&client).await?,
    Commands::Referrers(cmd) => cmd.execute(&client).await?,
    Commands::ReferrersMeta(cmd) => cmd.execute(&client).await?,
    Commands::ReferrersMetaDetail(cmd) => cmd.execute(&client).await?,
    Commands::ReferrersPostDetail(cmd) => cmd.execute(&client).await?,
    Commands::Shares(cmd) => cmd.execute(&client).await?,
    Commands::Realtime(cmd) => cmd.execute(&client).await?,
    Commands::Related(cmd) => cmd.execute(&client).await?,
    Commands::Search(cmd) => cmd.execute(&client).await?,
    Commands::Train(cmd) => cmd.execute(&client).await?,
    Commands::History(cmd) => cmd.execute(&client).await?,
  }

  Ok(())
}
