use std::fs;

use temple_icons::{DensityBucket, IconWriter, RES_DIR, ROUND_NAME, SQUARE_NAME, render};

#[test]
fn full_generation_writes_twelve_decodable_icons() {
    let tmp = tempfile::tempdir().unwrap();
    let report = IconWriter::new(tmp.path())
        .write_all()
        .unwrap();

    assert_eq!(report.directories.len(), 6);
    assert_eq!(report.file_count(), 12);

    let mut found = 0;
    for density in DensityBucket::ALL {
        let dir = tmp.path().join(RES_DIR).join(density.directory());
        let size = density.pixel_size();

        for name in [SQUARE_NAME, ROUND_NAME] {
            let img = image::open(dir.join(name)).unwrap().to_rgba8();
            assert_eq!(img.dimensions(), (size, size), "{density}/{name}");
            assert!(img.pixels().any(|p| p.0[3] == 255), "{density}/{name}: no opaque pixel");
            assert_eq!(img.get_pixel(0, 0).0[3], 0, "{density}/{name}: opaque corner");
            found += 1;
        }
    }
    assert_eq!(found, 12);

    let files = report
        .directories
        .iter()
        .map(|dir| fs::read_dir(dir).unwrap().count())
        .sum::<usize>();
    assert_eq!(files, 12);
}

#[test]
fn written_pixels_match_renderer() {
    let tmp = tempfile::tempdir().unwrap();
    let report = IconWriter::new(tmp.path())
        .write_all()
        .unwrap();

    for icon in &report.written {
        let decoded = image::open(&icon.square).unwrap().to_rgba8();
        assert_eq!(decoded, render(icon.preset.size()), "{}", icon.preset.density());
    }
}

#[test]
fn rerunning_overwrites_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    let writer = IconWriter::new(tmp.path());
    let first = writer.write_all().unwrap();
    let before = fs::read(&first.written[2].square).unwrap();

    let second = writer.write_all().unwrap();
    assert_eq!(first, second);
    assert_eq!(before, fs::read(&second.written[2].square).unwrap());
}
