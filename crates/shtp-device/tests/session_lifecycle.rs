use std::time::Duration;

use shtp_device::{Delay, DeviceError, NoDelay, Session, SessionConfig, SessionState};
use shtp_frame::{FrameError, COMMAND, CONTROL, EXECUTABLE, INPUT_SENSOR_REPORTS};
use shtp_report::ids::{
    ACCELEROMETER, ACTIVITY_CLASSIFIER, BASE_TIMESTAMP, GYROSCOPE, PRODUCT_ID_RESPONSE,
};
use shtp_report::ReportError;
use shtp_transport::MockTransport;

fn packet(channel: u8, sequence: u8, payload: &[u8]) -> Vec<u8> {
    let mut packet = ((payload.len() + 4) as u16).to_le_bytes().to_vec();
    packet.extend([channel, sequence]);
    packet.extend_from_slice(payload);
    packet
}

fn vector_report(report_id: u8, samples: [i16; 3]) -> Vec<u8> {
    let mut report = vec![report_id, 0x00, 0x03, 0x00];
    for sample in samples {
        report.extend_from_slice(&sample.to_le_bytes());
    }
    report
}

fn product_id_response() -> Vec<u8> {
    let mut response = vec![PRODUCT_ID_RESPONSE, 0x01, 3, 2];
    response.extend_from_slice(&10004517u32.to_le_bytes());
    response.extend_from_slice(&373u32.to_le_bytes());
    response.extend_from_slice(&[7, 0, 0, 0]);
    response
}

/// Transport scripted with a successful reset and identify exchange.
fn booted_hub() -> MockTransport {
    let mut mock = MockTransport::new();
    mock.push_packet(&packet(COMMAND, 0, &[0x00, 0x01, 0x01]));
    mock.push_packet(&packet(EXECUTABLE, 0, &[0x01]));
    mock.push_packet(&packet(CONTROL, 0, &[0xF1, 0x00, 0x84]));
    mock.push_packet(&packet(CONTROL, 1, &product_id_response()));
    mock
}

fn ready_session(mock: MockTransport) -> Session<MockTransport, NoDelay> {
    Session::open(mock, NoDelay, SessionConfig::default()).expect("handshake should succeed")
}

#[derive(Default)]
struct RecordingDelay(Vec<Duration>);

impl Delay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.0.push(duration);
    }
}

#[test]
fn handshake_reaches_ready_and_records_identity() {
    let mut delay = RecordingDelay::default();
    let session = Session::open(booted_hub(), &mut delay, SessionConfig::default()).unwrap();

    assert_eq!(session.state(), SessionState::Ready);
    let product = session.product_id().expect("identity should be parsed");
    assert_eq!(product.version(), "3.2.7");

    let writes = session.transport().writes();
    assert_eq!(writes.len(), 3);
    assert_eq!(writes[0], vec![5, 0, EXECUTABLE, 0, 0x01]);
    assert_eq!(writes[1], vec![5, 0, EXECUTABLE, 1, 0x01]);
    assert_eq!(writes[2], vec![6, 0, CONTROL, 0, 0xF9, 0x00]);
    assert_eq!(session.framer().inbound_sequence(CONTROL), Some(1));
    drop(session);

    assert_eq!(
        delay.0,
        vec![
            Duration::from_millis(500),
            Duration::from_millis(500),
            Duration::from_millis(100)
        ]
    );
}

#[test]
fn wrong_identity_byte_fails_handshake() {
    let mut mock = MockTransport::new();
    for seq in 0..3 {
        mock.push_packet(&packet(COMMAND, seq, &[0x00]));
    }
    mock.push_packet(&packet(CONTROL, 0, &[0xF1, 0x00]));

    let mut session = Session::new(mock, NoDelay, SessionConfig::default());
    let err = session.start().unwrap_err();

    assert!(matches!(
        err,
        DeviceError::HandshakeFailed {
            expected: 0xF8,
            actual: Some(0xF1)
        }
    ));
    assert_eq!(session.state(), SessionState::Failed);
    assert!(matches!(
        session.gyroscope(),
        Err(DeviceError::NotReady(SessionState::Failed))
    ));
}

#[test]
fn empty_startup_packet_still_reaches_ready() {
    let mut mock = MockTransport::new();
    mock.push_packet(&packet(COMMAND, 0, &[0x00, 0x01, 0x01]));
    mock.push_packet(&packet(EXECUTABLE, 0, &[0x01]));
    mock.push_read(vec![0, 0, 0, 0]);
    mock.push_packet(&packet(CONTROL, 0, &product_id_response()));

    let session = ready_session(mock);

    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.product_id().is_some());
    assert_eq!(session.transport().pending_reads(), 0);
}

#[test]
fn silent_identity_answer_fails_handshake() {
    let mut mock = MockTransport::new();
    for seq in 0..3 {
        mock.push_packet(&packet(COMMAND, seq, &[0x00]));
    }
    mock.push_read(vec![0, 0, 0, 0]);

    let mut session = Session::new(mock, NoDelay, SessionConfig::default());
    let err = session.start().unwrap_err();

    assert!(matches!(
        err,
        DeviceError::HandshakeFailed {
            expected: 0xF8,
            actual: None
        }
    ));
    assert_eq!(session.state(), SessionState::Failed);
}

#[test]
fn failed_state_is_terminal() {
    let mut mock = MockTransport::new();
    for seq in 0..3 {
        mock.push_packet(&packet(COMMAND, seq, &[0x00]));
    }
    mock.push_packet(&packet(CONTROL, 0, &[0xF1, 0x00]));
    let mut session = Session::new(mock, NoDelay, SessionConfig::default());
    assert!(session.start().is_err());

    // A complete exchange is queued, but the session must not come back.
    for seq in 3..6 {
        session
            .transport_mut()
            .push_packet(&packet(COMMAND, seq, &[0x00]));
    }
    session
        .transport_mut()
        .push_packet(&packet(CONTROL, 1, &product_id_response()));

    assert!(matches!(
        session.start(),
        Err(DeviceError::NotReady(SessionState::Failed))
    ));
    assert_eq!(session.state(), SessionState::Failed);
    assert_eq!(session.transport().pending_reads(), 8);
}

#[test]
fn ready_session_cannot_be_started_again() {
    let mut session = ready_session(booted_hub());
    assert!(matches!(
        session.start(),
        Err(DeviceError::NotReady(SessionState::Ready))
    ));
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn open_surfaces_handshake_failure() {
    let mut mock = MockTransport::new();
    for seq in 0..4 {
        mock.push_packet(&packet(COMMAND, seq, &[0x00]));
    }
    let result = Session::open(mock, NoDelay, SessionConfig::default());
    assert!(matches!(
        result,
        Err(DeviceError::HandshakeFailed { actual: Some(0x00), .. })
    ));
}

#[test]
fn enable_feature_sends_set_feature_command() {
    let mut delay = RecordingDelay::default();
    let mut session = Session::open(booted_hub(), &mut delay, SessionConfig::default()).unwrap();

    session.enable_feature(ACCELEROMETER, 100_000, 0).unwrap();
    session.enable_report(GYROSCOPE).unwrap();

    let writes = session.transport().writes();
    assert_eq!(
        writes[3],
        vec![
            21, 0, CONTROL, 1, 0xFD, ACCELEROMETER, 0, 0, 0, 0xA0, 0x86, 0x01, 0x00, 0, 0, 0, 0,
            0, 0, 0, 0
        ]
    );
    assert_eq!(&writes[4][..6], &[21, 0, CONTROL, 2, 0xFD, GYROSCOPE]);
    assert_eq!(&writes[4][9..13], &50_000u32.to_le_bytes());
    drop(session);

    assert_eq!(&delay.0[3..], &[Duration::from_millis(100); 2]);
}

#[test]
fn activity_classifier_request_is_all_zero() {
    let mut session = ready_session(booted_hub());
    session.enable_feature(ACTIVITY_CLASSIFIER, 50_000, 0x1FF).unwrap();
    let last = session.transport().writes().last().unwrap().clone();
    assert_eq!(&last[..4], &[21, 0, CONTROL, 1]);
    assert_eq!(&last[4..], &[0u8; 17]);
}

#[test]
fn latest_is_empty_then_last_value_wins() {
    let mut session = ready_session(booted_hub());
    assert!(session.acceleration().unwrap().is_empty());

    session.transport_mut().push_packet(&packet(
        INPUT_SENSOR_REPORTS,
        0,
        &vector_report(ACCELEROMETER, [100, -200, 300]),
    ));
    assert_eq!(
        session.acceleration().unwrap(),
        vec![0.390625, -0.78125, 1.171875]
    );

    session.transport_mut().push_packet(&packet(
        INPUT_SENSOR_REPORTS,
        1,
        &vector_report(ACCELEROMETER, [256, 512, -256]),
    ));
    assert_eq!(session.acceleration().unwrap(), vec![1.0, 2.0, -1.0]);

    // Nothing new queued: the cached value stays.
    assert_eq!(session.acceleration().unwrap(), vec![1.0, 2.0, -1.0]);
    assert!(session.gyroscope().unwrap().is_empty());
}

#[test]
fn poll_decodes_timestamped_batches_and_skips_other_channels() {
    let mut session = ready_session(booted_hub());

    let mut batch = vec![BASE_TIMESTAMP, 0, 0, 0, 0];
    batch.extend(vector_report(GYROSCOPE, [512, -512, 1024]));
    batch.extend(vector_report(ACCELEROMETER, [256, 256, 256]));
    session
        .transport_mut()
        .push_packet(&packet(CONTROL, 2, &[0xFC, ACCELEROMETER]));
    session
        .transport_mut()
        .push_packet(&packet(INPUT_SENSOR_REPORTS, 0, &batch));

    assert_eq!(session.poll(10).unwrap(), 2);
    assert_eq!(session.readings().get(GYROSCOPE), &[1.0, -1.0, 2.0]);
    assert_eq!(session.readings().get(ACCELEROMETER), &[1.0, 1.0, 1.0]);
    assert_eq!(session.framer().inbound_sequence(INPUT_SENSOR_REPORTS), Some(0));
}

#[test]
fn poll_respects_frame_budget() {
    let mut session = ready_session(booted_hub());
    for seq in 0..3 {
        session.transport_mut().push_packet(&packet(
            INPUT_SENSOR_REPORTS,
            seq,
            &vector_report(GYROSCOPE, [i16::from(seq) * 512, 0, 0]),
        ));
    }

    assert_eq!(session.poll(2).unwrap(), 2);
    assert_eq!(session.readings().get(GYROSCOPE), &[1.0, 0.0, 0.0]);
    assert_eq!(session.poll(2).unwrap(), 1);
    assert_eq!(session.readings().get(GYROSCOPE), &[2.0, 0.0, 0.0]);
}

#[test]
fn poll_stops_quietly_when_hub_has_nothing() {
    let mut session = ready_session(booted_hub());
    session.transport_mut().push_read(vec![0, 0, 0, 0]);
    session.transport_mut().push_packet(&packet(
        INPUT_SENSOR_REPORTS,
        0,
        &vector_report(GYROSCOPE, [512, 0, 0]),
    ));

    // The empty header ends the poll before the queued packet.
    assert_eq!(session.poll(10).unwrap(), 0);
    assert!(session.readings().is_empty());
}

#[test]
fn unknown_report_id_is_fatal_to_poll() {
    let mut session = ready_session(booted_hub());
    session
        .transport_mut()
        .push_packet(&packet(INPUT_SENSOR_REPORTS, 0, &[0x7F, 0, 0, 0]));

    let err = session.poll(10).unwrap_err();
    assert!(matches!(
        err,
        DeviceError::Report(ReportError::UnknownReportId(0x7F))
    ));
    // Decode errors do not tear the session down.
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn send_failure_is_surfaced() {
    let mut session = ready_session(booted_hub());
    session.transport_mut().fail_writes(true);
    let err = session.enable_report(ACCELEROMETER).unwrap_err();
    assert!(matches!(err, DeviceError::Frame(FrameError::Transport(_))));
}
