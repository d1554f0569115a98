// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::engines::traits::{EngineError, ImageFetcher};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; imgbatch/0.1)";

/// 抓取引擎
///
/// 基于reqwest的图片下载引擎，整个运行期间共享同一个连接池
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// 创建抓取引擎
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求超时时间，None 表示不限制
    pub fn new(timeout: Option<Duration>) -> Result<Self, EngineError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl ImageFetcher for ReqwestFetcher {
    /// 执行HTTP GET并返回响应体
    ///
    /// 非2xx状态码视为传输错误
    async fn fetch(&self, url: &str) -> Result<Bytes, EngineError> {
        let parsed = Url::parse(url).map_err(|e| EngineError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let start = Instant::now();
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(
            url,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched resource"
        );
        Ok(body)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
