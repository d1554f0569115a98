// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use imgbatch::config::settings::Settings;
use std::path::Path;

/// 以临时目录为根构建配置，所有路径都指向 `root` 下
pub fn settings_in(root: &Path, overrides: &[(&str, &str)]) -> Settings {
    let path = |name: &str| root.join(name).to_string_lossy().to_string();

    let mut builder = Settings::defaults_builder()
        .unwrap()
        .set_override("source.csv_path", path("edited.csv"))
        .unwrap()
        .set_override("download.images_dir", path("images"))
        .unwrap()
        .set_override("compress.input_dir", path("images"))
        .unwrap()
        .set_override("compress.output_dir", path("compressed"))
        .unwrap()
        .set_override("manifest.present_dir", path("compressed"))
        .unwrap()
        .set_override("manifest.output_path", path("data.json"))
        .unwrap()
        .set_override("runner.concurrency", "2")
        .unwrap();
    for (key, value) in overrides {
        builder = builder.set_override(*key, *value).unwrap();
    }

    let settings: Settings = builder.build().unwrap().try_deserialize().unwrap();
    settings.validate().unwrap();
    settings
}

/// 写出带表头的8列CSV，`rows` 为 (id, url, ratio, description)
pub fn write_csv(root: &Path, rows: &[(&str, &str, &str, &str)]) {
    let mut writer = csv::Writer::from_path(root.join("edited.csv")).unwrap();
    writer
        .write_record(["id", "url", "c2", "c3", "c4", "ratio", "c6", "description"])
        .unwrap();
    for (id, url, ratio, description) in rows {
        writer
            .write_record([*id, *url, "", "", "", *ratio, "", *description])
            .unwrap();
    }
    writer.flush().unwrap();
}

/// 生成一张可解码的JPEG
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
    .save_with_format(path, image::ImageFormat::Jpeg)
    .unwrap();
}
