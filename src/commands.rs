use anyhow::{anyhow, bail, Context as _, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use crossterm::style::{Color, Stylize};
use hourglass::grid::{day_initial, year_options, DAYS_IN_WEEK, ENTRY_YEAR_SPAN};
use hourglass::layout::{marker_label, time_references};
use hourglass::record::{decode_date_key, decode_time};
use hourglass::storage::{locate_data, DataLocation, DataScope};
use hourglass::{
    Config, EngineError, ErrorKind, Palette, Rgb, Session, Task, TextColors, Week, YearMonth,
};
use std::collections::HashSet;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Settings shared by every command.
pub struct Context {
    location: DataLocation,
    paint: Paint,
}

/// Colors output with the configured palette when writing to a terminal.
struct Paint {
    palette: Palette,
    event_text: TextColors,
    enabled: bool,
}

impl Paint {
    fn new(config: &Config) -> Self {
        Paint {
            palette: config.palette(),
            event_text: config.event_text,
            enabled: std::io::stdout().is_terminal(),
        }
    }

    fn fg(&self, text: &str, fg: Rgb) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.with(term_color(fg)).to_string()
    }

    fn on(&self, text: &str, fg: Rgb, bg: Rgb) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.with(term_color(fg)).on(term_color(bg)).to_string()
    }

    fn label(&self, text: &str) -> String {
        self.on(text, self.palette.label_text, self.palette.widget)
    }

    fn heading(&self, text: &str) -> String {
        self.on(text, self.palette.menu_text, self.palette.background)
    }

    fn faint(&self, text: &str) -> String {
        self.fg(text, self.palette.faint_text)
    }

    /// An event marker drawn on its own color with readable text.
    fn event(&self, text: &str, background: Rgb) -> String {
        self.on(text, self.event_text.for_background(background), background)
    }
}

fn term_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Context {
    pub fn new(data_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        let config = Config::load(config.as_deref())?;
        let location = locate_data(data_dir.as_deref(), config.data_dir.as_deref())?;
        log::debug!(
            "using data in {} ({})",
            location.dir.display(),
            match location.scope {
                DataScope::Override => "override",
                DataScope::Configured => "config",
                DataScope::Default => "default",
            }
        );
        let paint = Paint::new(&config);
        Ok(Context { location, paint })
    }

    fn open(&self) -> Result<Session> {
        let session = Session::open(self.location.clone())
            .context("unable to read from schedule or to-do list files")?;
        log::debug!(
            "session holds {} events and {} tasks from {}",
            session.schedule.len(),
            session.tasks.len(),
            session.location().dir.display()
        );
        Ok(session)
    }
}

pub fn week(ctx: &Context, date: Option<String>) -> Result<()> {
    let session = ctx.open()?;
    let week = match date {
        Some(raw) => Week::containing(parse_date(&raw)?),
        None => Week::current(),
    };
    print_week(ctx, &session, &week);
    close(session)
}

pub fn month(ctx: &Context, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let session = ctx.open()?;
    let current = YearMonth::current();
    let shown = YearMonth::new(
        year.unwrap_or(current.year()),
        month.unwrap_or(current.month()),
    )
    .ok_or_else(|| anyhow!("invalid month: {:?}/{:?}", year, month))?;
    print_month(ctx, &session, &shown);
    close(session)
}

pub fn add_event(
    ctx: &Context,
    date: String,
    time: String,
    color: String,
    description: String,
) -> Result<()> {
    let (date, time, color) = parse_event_fields(&date, &time, &color)?;
    let years = year_options(Local::now().year(), ENTRY_YEAR_SPAN);
    if !years.contains(&date.year()) {
        bail!(
            "events can only be entered for {} to {}",
            years.start(),
            years.end()
        );
    }
    let mut session = ctx.open()?;
    session.schedule.add(date, time, color, description);
    log::debug!("added event on {}", date);
    print_week(ctx, &session, &Week::containing(date));
    close(session)
}

pub fn remove_event(
    ctx: &Context,
    date: String,
    time: String,
    color: String,
    description: String,
) -> Result<()> {
    let (date, time, color) = parse_event_fields(&date, &time, &color)?;
    let mut session = ctx.open()?;
    let removed = session.schedule.remove(date, time, color, &description);
    if let Some(event) = report(removed)? {
        println!("Removed {}", marker_label(&event));
    }
    print_week(ctx, &session, &Week::containing(date));
    close(session)
}

pub fn tasks(ctx: &Context) -> Result<()> {
    let session = ctx.open()?;
    print_tasks(ctx, &session);
    close(session)
}

pub fn add_task(ctx: &Context, description: String) -> Result<()> {
    let mut session = ctx.open()?;
    session.tasks.add(description);
    print_tasks(ctx, &session);
    close(session)
}

pub fn toggle_task(ctx: &Context, description: String) -> Result<()> {
    let mut session = ctx.open()?;
    let target = lookup_task(&session, &description);
    report(session.tasks.toggle(&target).map(|_| ()))?;
    print_tasks(ctx, &session);
    close(session)
}

pub fn remove_task(ctx: &Context, description: String) -> Result<()> {
    let mut session = ctx.open()?;
    let target = lookup_task(&session, &description);
    if let Some(task) = report(session.tasks.remove(&target))? {
        println!("Removed \"{}\"", task.description);
    }
    print_tasks(ctx, &session);
    close(session)
}

fn close(session: Session) -> Result<()> {
    session
        .close()
        .context("unable to write to schedule or to-do list files")
}

/// Turns a missing event or task into a message; other errors propagate.
fn report<T>(result: Result<T, EngineError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::warn!("{}", err);
            eprintln!("{}", err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// The full record of the first task with this text, or a pending task with
/// it when there is none (which then fails to match).
fn lookup_task(session: &Session, description: &str) -> Task {
    session
        .tasks
        .find(description)
        .cloned()
        .unwrap_or_else(|| Task::new(description))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    decode_date_key(raw.trim()).map_err(|_| anyhow!("invalid date (use YYYYMMDD): {}", raw))
}

fn parse_event_fields(date: &str, time: &str, color: &str) -> Result<(NaiveDate, NaiveTime, Rgb)> {
    let date = parse_date(date)?;
    let time = decode_time(time.trim())
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M"))
        .map_err(|_| anyhow!("invalid time (use HHMM): {}", time))?;
    let color: Rgb = color
        .parse()
        .map_err(|_| anyhow!("invalid color (use rrggbb): {}", color))?;
    Ok((date, time, color))
}

fn print_week(ctx: &Context, session: &Session, week: &Week) {
    let paint = &ctx.paint;
    let today = Local::now().date_naive();
    println!("{}", paint.heading(&week.label()));
    let references: Vec<String> = time_references()
        .map(|(label, pos)| format!("{} @ {:.0}%", label, pos * 100.0))
        .collect();
    println!("{}", paint.faint(&format!("  ({})", references.join(", "))));
    for (column, events) in session.schedule.week_events(week).iter().enumerate() {
        let marker = if week.days()[column] == today { " *" } else { "" };
        println!("{}{}", paint.label(&week.day_label(column)), marker);
        for event in events.iter() {
            println!(
                "  {} {}",
                paint.event(&format!("{:<40}", marker_label(event)), event.color),
                paint.faint(&format!("{:>5.1}%  {}", event.position() * 100.0, event.color))
            );
        }
    }
}

fn print_month(ctx: &Context, session: &Session, month: &YearMonth) {
    let paint = &ctx.paint;
    let busy: HashSet<u32> = session
        .schedule
        .dates()
        .filter(|date| YearMonth::containing(*date) == *month)
        .map(|date| date.day())
        .collect();
    println!("{}", paint.heading(&month.title()));
    let header: Vec<String> = (0..DAYS_IN_WEEK)
        .map(|c| format!("{:>3}", day_initial(c)))
        .collect();
    println!("{}", paint.faint(&header.join("")));
    for row in month.grid().rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(day) if busy.contains(day) => paint.label(&format!("{:>2}*", day)),
                Some(day) => paint.label(&format!("{:>2} ", day)),
                None => "   ".to_string(),
            })
            .collect();
        println!("{}", cells.join("").trim_end());
    }
}

fn print_tasks(ctx: &Context, session: &Session) {
    let paint = &ctx.paint;
    if session.tasks.is_empty() {
        println!("{}", paint.faint("(no tasks)"));
        return;
    }
    for task in session.tasks.all() {
        if task.done {
            println!("{}", paint.faint(&format!("[x] {}", task.description)));
        } else {
            println!("[ ] {}", paint.label(&task.description));
        }
    }
    println!(
        "{}",
        paint.faint(&format!(
            "{} of {} open",
            session.tasks.pending(),
            session.tasks.len()
        ))
    );
}
