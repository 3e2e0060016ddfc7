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

use super::print_json;
use anyhow::{ensure, Result};
use clap::Args;
use parsely_client::ParselyClient;
use tracing::info;

#[derive(Args, Debug)]
pub struct TrainCommand {
  /// User identifier
  uuid: String,

  /// URL the user viewed
  url: String,
}

impl TrainCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let accepted = client.user(&self.uuid).train(&self.url).await?;
    ensure!(accepted, "training for {} was not accepted", self.uuid);
    info!("Recorded {} for {}", self.url, self.uuid);
    Ok(())
  }
}

#[derive(Args, Debug)]
pub struct HistoryCommand {
  /// User identifier
  uuid: String,
}

impl HistoryCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let history = client.user(&self.uuid).history().await?;
    print_json(&history)
  }
}
