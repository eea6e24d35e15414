mod common;

use common::*;
use pretty_assertions::assert_eq;
use smf_track_writer::prelude::*;

#[test]
fn repeated_status_is_written_once() {
    let file = write_track(WriterConfig::default(), |w| {
        w.write_note_event(0x90, 60, 100)?;
        w.write_note_event(0x90, 64, 100)?;
        w.advance(48)?;
        w.write_note_event(0x90, 60, 0)
    });
    assert_eq!(
        events_of(&file),
        &[0x00, 0x90, 60, 100, 0x00, 64, 100, 0x30, 60, 0]
    );
}

#[test]
fn changed_status_is_written_and_then_held() {
    let mut held = Vec::new();
    let file = write_track(WriterConfig::default(), |w| {
        assert_eq!(w.running_status(), None);
        w.write_note_event(0x90, 60, 100)?;
        held.push(w.running_status());
        w.write_note_event(0x80, 60, 0)?;
        held.push(w.running_status());
        w.write_note_event(0x80, 62, 0)?;
        held.push(w.running_status());
        w.write_note_event(0x91, 62, 1)?;
        held.push(w.running_status());
        Ok(())
    });

    assert_eq!(
        events_of(&file),
        &[
            0x00, 0x90, 60, 100, //
            0x00, 0x80, 60, 0, //
            0x00, 62, 0, //
            0x00, 0x91, 62, 1,
        ]
    );
    let held: Vec<u8> = held.into_iter().flatten().map(|s| s.byte()).collect();
    assert_eq!(held, vec![0x90, 0x80, 0x80, 0x91]);
}

#[test]
fn typed_messages_share_running_status_with_raw_ones() {
    let file = write_track(WriterConfig::default(), |w| {
        w.write_note_event(0x92, 50, 80)?;
        w.note_on(Channel::Three, 52, 80)?;
        w.write_message(ChannelVoiceMessage::note_on(Channel::Three, 55, 80).unwrap())
    });
    assert_eq!(
        events_of(&file),
        &[0x00, 0x92, 50, 80, 0x00, 52, 80, 0x00, 55, 80]
    );
}

#[test]
fn meta_events_keep_running_status_by_default() {
    let file = write_track(WriterConfig::default(), |w| {
        w.note_on(Channel::One, 60, 100)?;
        w.add_tempo(60)?;
        w.note_on(Channel::One, 62, 100)
    });
    assert_eq!(
        events_of(&file),
        &[
            0x00, 0x90, 60, 100, //
            0x00, 0xFF, 0x51, 0x03, 0x0F, 0x42, 0x40, //
            0x00, 62, 100,
        ]
    );
}

#[test]
fn meta_events_can_reset_running_status() {
    let config = WriterConfig::default().with_running_status(RunningStatus::ResetOnMeta);
    let file = write_track(config, |w| {
        w.note_on(Channel::One, 60, 100)?;
        w.note_on(Channel::One, 61, 100)?;
        w.add_track_name("x")?;
        assert_eq!(w.running_status(), None);
        w.note_on(Channel::One, 62, 100)
    });
    assert_eq!(
        events_of(&file),
        &[
            0x00, 0x90, 60, 100, //
            0x00, 61, 100, //
            0x00, 0xFF, 0x03, 0x01, b'x', //
            0x00, 0x90, 62, 100,
        ]
    );
}

#[test]
fn running_status_can_be_disabled() {
    let config = WriterConfig::default().with_running_status(RunningStatus::Disabled);
    let file = write_track(config, |w| {
        w.note_on(Channel::One, 60, 100)?;
        w.note_on(Channel::One, 61, 100)
    });
    assert_eq!(
        events_of(&file),
        &[0x00, 0x90, 60, 100, 0x00, 0x90, 61, 100]
    );
}
