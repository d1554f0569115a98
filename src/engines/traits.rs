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

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },
    /// URL无法解析
    #[error("Invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 图片抓取引擎
///
/// 返回资源的原始字节，不做任何解码
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// 抓取URL指向的资源
    async fn fetch(&self, url: &str) -> Result<Bytes, EngineError>;

    /// 获取引擎名称
    fn name(&self) -> &'static str;
}
