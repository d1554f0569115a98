// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::OperationError;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 重新编码图片
///
/// 输出格式由目标文件扩展名决定。JPEG按 `quality` 有损编码，
/// 其他格式交给编解码器默认参数。这是阻塞调用，异步上下文中应放到
/// `spawn_blocking` 里执行。
pub fn recompress(source: &Path, destination: &Path, quality: u8) -> Result<(), OperationError> {
    let img = ImageReader::open(source)?.with_guessed_format()?.decode()?;
    let format = ImageFormat::from_path(destination)?;

    match format {
        ImageFormat::Jpeg => encode_jpeg(&img, destination, quality),
        other => {
            img.save_with_format(destination, other)?;
            Ok(())
        }
    }
}

fn encode_jpeg(img: &DynamicImage, destination: &Path, quality: u8) -> Result<(), OperationError> {
    // JPEG has no alpha channel
    let rgb = img.to_rgb8();
    let mut writer = BufWriter::new(File::create(destination)?);
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100));
        encoder.encode_image(&rgb)?;
    }
    writer.flush()?;
    Ok(())
}
