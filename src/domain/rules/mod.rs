// Domain rules - Episode naming policies

use std::fmt;

use crate::domain::model::Token;

/// Characters that cannot appear in a Windows file name
pub const ILLEGAL_FILE_NAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Numbers below this threshold get a leading zero
const PAD_THRESHOLD: f64 = 10.0;

/// Metadata that identifies one episode
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeName {
    pub show: String,
    pub season: u32,
    pub episode: f64,
    pub description: String,
}

impl EpisodeName {
    pub fn new(
        show: impl Into<String>,
        season: u32,
        episode: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            show: show.into(),
            season,
            episode,
            description: description.into(),
        }
    }

    /// `<Title> - S<SS>E<EE> - <Description>`, sanitized
    pub fn file_name(&self) -> String {
        episode_file_name(&self.show, self.season, self.episode, &self.description)
    }

    /// The file name as a pipeline token
    pub fn token(&self) -> Token {
        Token::new(self.file_name())
    }
}

impl fmt::Display for EpisodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Build the canonical episode file name.
///
/// The show title is word-capitalized, season and episode numbers below 10 are
/// prefixed with `0`, and the result goes through [`sanitize_file_name`].
///
/// ```
/// use epmux_cli::domain::rules::episode_file_name;
///
/// assert_eq!(
///     episode_file_name("lost", 12, 5.5, "name:unknown"),
///     "Lost - S12E05.5 - name unknown"
/// );
/// ```
pub fn episode_file_name(show: &str, season: u32, episode: f64, description: &str) -> String {
    let file_name = format!(
        "{} - S{}E{} - {}",
        title_case(show),
        pad_number(season as f64, season.to_string()),
        pad_number(episode, format_episode(episode)),
        description
    );
    sanitize_file_name(&file_name)
}

/// Replace every illegal file name character with a space.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if ILLEGAL_FILE_NAME_CHARS.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Upper-case the first letter of every word, leaving the rest untouched.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        result.push(if at_word_start { title_char(c) } else { c });
        at_word_start = is_word_separator(c);
    }

    result
}

/// Title-case form of a single character; never changes the character count.
fn title_char(c: char) -> char {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        }
    }
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

/// Shortest exact decimal form: `5.0` renders as `5`, `5.5` as `5.5`
fn format_episode(episode: f64) -> String {
    format!("{}", episode)
}

fn pad_number(value: f64, rendered: String) -> String {
    if value < PAD_THRESHOLD {
        format!("0{}", rendered)
    } else {
        rendered
    }
}
