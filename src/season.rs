//! Season selection and operator prompts.

use crate::r#trait::SoundtrackPage;
use crate::{Result, ScrapeError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// The person running the scraper.
///
/// The workflow only ever needs two answers from the operator (the show name
/// and, for multi-season shows, the season number), plus a way to tell them
/// which default was picked.
pub trait Operator {
    /// Show `prompt` and return the operator's answer.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Report something the operator should see.
    fn tell(&mut self, message: &str) {
        println!("{message}");
    }
}

/// [`Operator`] on the process's stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleOperator;

impl ConsoleOperator {
    pub fn new() -> Self {
        Self
    }
}

impl Operator for ConsoleOperator {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// [`Operator`] that replays canned answers and records what it was shown.
///
/// Running out of answers is an [`io::ErrorKind::UnexpectedEof`] error, the
/// same thing a closed stdin produces.
#[derive(Debug, Default)]
pub struct ScriptedOperator {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedOperator {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every message told so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Operator for ScriptedOperator {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            ScrapeError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scripted answer left",
            ))
        })
    }

    fn tell(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// The season the walk will run over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonChoice {
    /// 0-based position among the season headings
    pub index: usize,
    /// Heading text of the chosen season
    pub title: String,
    /// How many seasons the show page listed
    pub available: usize,
}

/// Turn the operator's answer into a 0-based season index.
///
/// A single season is always index 0 and needs no answer. With more seasons
/// the answer must be a 1-based number within range.
///
/// ```rust
/// use soundtrack_scraper::season::resolve_season_choice;
///
/// assert_eq!(resolve_season_choice(1, None).unwrap(), 0);
/// assert_eq!(resolve_season_choice(4, Some(" 3 ")).unwrap(), 2);
/// assert!(resolve_season_choice(4, Some("5")).is_err());
/// ```
pub fn resolve_season_choice(available: usize, answer: Option<&str>) -> Result<usize> {
    match available {
        // Nothing to wait for here, the caller already read the headings.
        0 => Err(ScrapeError::NotFound {
            what: "season heading".to_string(),
            timeout_secs: 0,
        }),
        1 => Ok(0),
        _ => {
            let answer = answer.map(str::trim).unwrap_or_default();
            let choice: usize = answer.parse().map_err(|_| {
                ScrapeError::InvalidSelection(format!(
                    "'{answer}' is not a season number between 1 and {available}"
                ))
            })?;
            if !(1..=available).contains(&choice) {
                return Err(ScrapeError::InvalidSelection(format!(
                    "season {choice} is outside 1-{available}"
                )));
            }
            Ok(choice - 1)
        }
    }
}

/// Pick a season on the show page and navigate into it.
///
/// The operator is only asked when the page lists more than one season.
pub async fn select_season(
    page: &dyn SoundtrackPage,
    operator: &mut dyn Operator,
    show_name: &str,
) -> Result<SeasonChoice> {
    let seasons = page.headings().await?;
    let available = seasons.len();
    log::debug!("Show page lists {available} season(s)");

    let index = if available > 1 {
        let answer = operator.ask(&format!(
            "Scrape the soundtrack for which season?\n1-{available} \n"
        ))?;
        resolve_season_choice(available, Some(&answer))?
    } else {
        operator.tell(&format!("scraping soundtrack for {show_name} season 1"));
        resolve_season_choice(available, None)?
    };

    let title = seasons[index].clone();
    log::info!("Selected season {}: {title}", index + 1);
    page.activate_heading(index).await?;

    Ok(SeasonChoice {
        index,
        title,
        available,
    })
}
