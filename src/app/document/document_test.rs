use image::RgbaImage;

use super::*;

#[test]
fn output_paths_append_suffixes() {
    let paths = output_paths(Path::new("/tmp/walls/sunset.jpg"));
    assert_eq!(paths.left, PathBuf::from("/tmp/walls/sunset_left.jpg"));
    assert_eq!(paths.right, PathBuf::from("/tmp/walls/sunset_right.jpg"));
}

#[test]
fn output_paths_default_extension() {
    let paths = output_paths(Path::new("out/pair"));
    assert_eq!(paths.left, PathBuf::from("out/pair_left.png"));
    assert_eq!(paths.right, PathBuf::from("out/pair_right.png"));
}

#[test]
fn output_paths_keep_inner_dots() {
    let paths = output_paths(Path::new("a.b.png"));
    assert_eq!(paths.left, PathBuf::from("a.b_left.png"));
}

#[test]
fn empty_image_rejected() {
    let err = SourceImage::new(DynamicImage::ImageRgba8(RgbaImage::new(0, 10)), None)
        .err()
        .expect("empty image");
    assert!(matches!(err, CodecError::EmptyImage { width: 0, height: 10, .. }));
}

#[test]
fn missing_file_is_decode_error() {
    let err = FsCodec
        .decode(Path::new("/definitely/not/here.png"))
        .expect_err("missing file");
    assert!(matches!(err, CodecError::Decode { .. }));
}

#[test]
fn corrupt_file_is_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png").expect("write");
    let err = SourceImage::open(&FsCodec, &path).err().expect("corrupt file");
    assert!(matches!(err, CodecError::Decode { .. }));
}

#[test]
fn unsupported_extension_is_encode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let image = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));
    let err = FsCodec
        .encode(&image, &dir.path().join("out.nope"))
        .expect_err("unknown extension");
    assert!(matches!(err, CodecError::Encode { .. }));
}

#[test]
fn encode_then_decode_keeps_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("round.png");
    FsCodec
        .encode(&DynamicImage::ImageRgba8(RgbaImage::new(7, 3)), &path)
        .expect("encode");
    let source = SourceImage::open(&FsCodec, &path).expect("decode");
    assert_eq!(source.dimensions(), (7, 3));
    assert_eq!(source.path(), Some(path.as_path()));
}
