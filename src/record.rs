//! Fixed-width line format for the schedule and task files.
//!
//! An event line is `YYYYMMDD` + `HHMM` + `rrggbb` + description, a task line
//! is a `0`/`1` completion flag followed by the description. Both files hold
//! one record per line.

use crate::model::{EngineError, Event, RecordError, Rgb, Task};
use crate::schedule::ScheduleIndex;
use crate::tasks::TaskList;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

pub const DATE_WIDTH: usize = 8;
pub const TIME_WIDTH: usize = 4;
pub const COLOR_WIDTH: usize = 6;
pub const EVENT_PREFIX_WIDTH: usize = DATE_WIDTH + TIME_WIDTH + COLOR_WIDTH;

const FLAG_PENDING: char = '0';
const FLAG_DONE: char = '1';

/// Formats a date as its 8-digit `YYYYMMDD` partition key.
pub fn encode_date_key(date: NaiveDate) -> Result<String, RecordError> {
    if !(0..=9999).contains(&date.year()) {
        return Err(RecordError::YearOutOfRange(date.year()));
    }
    Ok(format!(
        "{:04}{:02}{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

pub fn decode_date_key(key: &str) -> Result<NaiveDate, RecordError> {
    let invalid = || RecordError::InvalidDate(key.to_string());
    let digits = digit_fields(key, &[4, 2, 2]).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(digits[0] as i32, digits[1], digits[2]).ok_or_else(invalid)
}

pub fn encode_time(time: NaiveTime) -> String {
    format!("{:02}{:02}", time.hour(), time.minute())
}

pub fn decode_time(field: &str) -> Result<NaiveTime, RecordError> {
    let invalid = || RecordError::InvalidTime(field.to_string());
    let digits = digit_fields(field, &[2, 2]).ok_or_else(invalid)?;
    NaiveTime::from_hms_opt(digits[0], digits[1], 0).ok_or_else(invalid)
}

/// Encodes one event without the trailing newline.
pub fn encode_event(event: &Event) -> Result<String, RecordError> {
    check_description(&event.description)?;
    Ok(format!(
        "{}{}{}{}",
        encode_date_key(event.date)?,
        encode_time(event.time),
        event.color.to_hex(),
        event.description
    ))
}

pub fn decode_event(line: &str) -> Result<Event, RecordError> {
    if line.len() < EVENT_PREFIX_WIDTH {
        return Err(RecordError::TooShort {
            expected: EVENT_PREFIX_WIDTH,
            found: line.chars().count(),
        });
    }
    let field = |from: usize, to: usize, err: fn(String) -> RecordError| {
        line.get(from..to)
            .ok_or_else(|| err(line.chars().take(to).skip(from).collect()))
    };
    let date = decode_date_key(field(0, DATE_WIDTH, RecordError::InvalidDate)?)?;
    let time = decode_time(field(DATE_WIDTH, DATE_WIDTH + TIME_WIDTH, RecordError::InvalidTime)?)?;
    let color = Rgb::from_hex(field(
        DATE_WIDTH + TIME_WIDTH,
        EVENT_PREFIX_WIDTH,
        RecordError::InvalidColor,
    )?)?;
    let event = Event::new(date, time, color, &line[EVENT_PREFIX_WIDTH..]);
    check_description(&event.description)?;
    Ok(event)
}

pub fn encode_task(task: &Task) -> Result<String, RecordError> {
    check_description(&task.description)?;
    let flag = if task.done { FLAG_DONE } else { FLAG_PENDING };
    Ok(format!("{}{}", flag, task.description))
}

pub fn decode_task(line: &str) -> Result<Task, RecordError> {
    let flag = line.chars().next().ok_or(RecordError::TooShort {
        expected: 1,
        found: 0,
    })?;
    let done = match flag {
        FLAG_PENDING => false,
        FLAG_DONE => true,
        other => return Err(RecordError::InvalidFlag(other)),
    };
    let task = Task::new(&line[flag.len_utf8()..]).with_done(done);
    check_description(&task.description)?;
    Ok(task)
}

/// Rebuilds an index from schedule file contents. Lines are grouped by date
/// key, keeping file order within a date. The first bad line aborts the load.
pub fn decode_schedule(text: &str) -> Result<ScheduleIndex, EngineError> {
    let mut index = ScheduleIndex::new();
    for (number, line) in text.lines().enumerate() {
        let event = decode_event(line).map_err(|source| EngineError::MalformedRecord {
            line: Some(number + 1),
            source,
        })?;
        index.insert(event);
    }
    Ok(index)
}

pub fn encode_schedule(index: &ScheduleIndex) -> Result<String, EngineError> {
    let mut out = String::new();
    for event in index.iter() {
        out.push_str(&encode_event(event)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn decode_tasks(text: &str) -> Result<TaskList, EngineError> {
    let mut list = TaskList::new();
    for (number, line) in text.lines().enumerate() {
        let task = decode_task(line).map_err(|source| EngineError::MalformedRecord {
            line: Some(number + 1),
            source,
        })?;
        list.push(task);
    }
    Ok(list)
}

pub fn encode_tasks(list: &TaskList) -> Result<String, EngineError> {
    let mut out = String::new();
    for task in list.all() {
        out.push_str(&encode_task(task)?);
        out.push('\n');
    }
    Ok(out)
}

fn check_description(description: &str) -> Result<(), RecordError> {
    if description.contains(['\n', '\r']) {
        return Err(RecordError::EmbeddedNewline);
    }
    Ok(())
}

/// Splits `field` into runs of ASCII digits of the given widths.
fn digit_fields(field: &str, widths: &[usize]) -> Option<Vec<u32>> {
    if field.len() != widths.iter().sum::<usize>() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut start = 0;
    widths
        .iter()
        .map(|width| {
            let part = &field[start..start + width];
            start += width;
            part.parse().ok()
        })
        .collect()
}
