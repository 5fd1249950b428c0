use mp4duration::{media_duration, DurationError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn atom(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(&(payload.len() as u32 + 8).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out
}

fn mvhd_payload(timescale: u32, duration: u32) -> Vec<u8> {
    let mut p = vec![0u8; 20];
    p.extend_from_slice(&timescale.to_be_bytes());
    p.extend_from_slice(&duration.to_be_bytes());
    p.resize(100, 0);
    p
}

fn sample_mp4(timescale: u32, duration: u32) -> Vec<u8> {
    let mut data = atom(b"ftyp", b"isom\x00\x00\x02\x00isomiso2mp41");
    data.extend_from_slice(&atom(b"mdat", &[0xABu8; 256]));
    let mut moov_children = atom(b"free", &[0u8; 8]);
    moov_children.extend_from_slice(&atom(b"mvhd", &mvhd_payload(timescale, duration)));
    data.extend_from_slice(&atom(b"moov", &moov_children));
    data
}

#[test]
fn test_remote_duration() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mock_server = rt.block_on(MockServer::start());

    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path("/sample.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(sample_mp4(90_000, 450_000)))
            .expect(1)
            .mount(&mock_server)
            .await;
    });

    let url = format!("{}/sample.mp4", mock_server.uri());
    let duration = media_duration(&url).unwrap();

    assert_eq!(duration.units, 450_000);
    assert_eq!(duration.timescale, 90_000);
    assert_eq!(duration.seconds(), 5.0);
}

#[test]
fn test_remote_truncated_response() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mock_server = rt.block_on(MockServer::start());

    // Serve only the first 40 bytes of the file.
    let mut bytes = sample_mp4(1000, 5000);
    bytes.truncate(40);

    rt.block_on(async {
        Mock::given(method("GET"))
            .and(path("/cut.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes))
            .mount(&mock_server)
            .await;
    });

    let url = format!("{}/cut.mp4", mock_server.uri());
    let err = media_duration(&url).unwrap_err();
    assert!(matches!(err, DurationError::UnexpectedEndOfStream));
}

#[test]
fn test_remote_http_error() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mock_server = rt.block_on(MockServer::start());

    rt.block_on(async {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
    });

    let url = format!("{}/broken.mp4", mock_server.uri());
    let err = media_duration(&url).unwrap_err();
    assert!(matches!(err, DurationError::Stream(_)));
}
