//! Interactive browse session.
//!
//! A line-oriented stand-in for the directory page: the search box with its
//! suggestion popover, the filter panel and the result list. Every command
//! that changes the filters prints the new results and the updated page URL.
//!
//! ```text
//! type <text>       type into the search box (shows suggestions)
//! pick <n>          choose suggestion n
//! enter             submit the search box text
//! close             dismiss suggestions (click outside)
//! search <text>     set the search term directly
//! consult <video|clinic|all>
//! spec <name>       toggle a speciality
//! specs             list specialities
//! sort <fees|experience|none>
//! reset             clear all filters
//! show              print filters and results
//! url               print the page URL
//! help, quit
//! ```

use super::commands::CliApi;
use super::render::{
    render_doctor_list, render_error_panel, render_filters, render_specialities,
    render_suggestions, render_summary, render_url,
};
use docfind::api::CmdResult;
use docfind::error::Result;
use docfind::filter::{ConsultationType, SortBy};
use docfind::records::LoadStatus;
use std::io::{BufRead, Write};

const PROMPT: &str = "docfind> ";

const HELP: &str = "\
Commands:
  type <text>                  type into the search box (shows suggestions)
  pick <n>                     choose suggestion n
  enter                        submit the search box text
  close                        dismiss suggestions
  search <text>                set the search term directly
  consult <video|clinic|all>   filter by consultation type
  spec <name>                  toggle a speciality
  specs                        list specialities
  sort <fees|experience|none>  sort the results
  reset                        clear all filters
  show                         print filters and results
  url                          print the page URL
  help                         print this help
  quit                         leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Type(String),
    Pick(usize),
    Enter,
    Close,
    Search(String),
    Consult(Option<ConsultationType>),
    Spec(String),
    Specs,
    Sort(Option<SortBy>),
    Reset,
    Show,
    Url,
    Help,
    Quit,
}

/// Parses one input line. Blank lines are `Ok(None)`.
pub fn parse_line(line: &str) -> std::result::Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "type" => BrowseCommand::Type(rest.to_string()),
        "pick" => BrowseCommand::Pick(
            rest.parse()
                .map_err(|_| format!("pick expects a number, got '{}'", rest))?,
        ),
        "enter" => BrowseCommand::Enter,
        "close" => BrowseCommand::Close,
        "search" => BrowseCommand::Search(rest.to_string()),
        "consult" => BrowseCommand::Consult(match rest {
            "video" => Some(ConsultationType::VideoConsult),
            "clinic" => Some(ConsultationType::InClinic),
            "all" => None,
            other => return Err(format!("consult expects video, clinic or all, got '{}'", other)),
        }),
        "spec" if !rest.is_empty() => BrowseCommand::Spec(rest.to_string()),
        "spec" => return Err("spec expects a speciality name".to_string()),
        "specs" => BrowseCommand::Specs,
        "sort" => BrowseCommand::Sort(match rest {
            "fees" => Some(SortBy::Fees),
            "experience" => Some(SortBy::Experience),
            "none" => None,
            other => {
                return Err(format!(
                    "sort expects fees, experience or none, got '{}'",
                    other
                ))
            }
        }),
        "reset" => BrowseCommand::Reset,
        "show" => BrowseCommand::Show,
        "url" => BrowseCommand::Url,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => return Err(format!("Unknown command: {} (try 'help')", other)),
    };
    Ok(Some(command))
}

/// Runs commands from `input` until `quit` or end of input. `interactive`
/// adds the help banner and a prompt before each line.
pub fn run_session<R: BufRead, W: Write>(
    api: &mut CliApi,
    input: R,
    mut out: W,
    interactive: bool,
) -> Result<()> {
    if interactive {
        write!(out, "{}", HELP)?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(BrowseCommand::Quit)) => break,
            Ok(Some(command)) => execute(api, command, &mut out)?,
            Ok(None) => {}
            Err(message) => writeln!(out, "{}", message)?,
        }
        if interactive {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn execute<W: Write>(api: &mut CliApi, command: BrowseCommand, out: &mut W) -> Result<()> {
    match command {
        BrowseCommand::Type(text) => {
            let shown = api.type_search(text);
            if shown.suggestions.is_empty() {
                writeln!(out, "No suggestions.")?;
            } else {
                write!(out, "{}", render_suggestions(&shown.suggestions))?;
            }
        }
        BrowseCommand::Pick(position) => match api.select_suggestion(position) {
            Ok(result) => print_results(api, &result, out)?,
            Err(e) => writeln!(out, "{}", e)?,
        },
        BrowseCommand::Enter => {
            let result = api.submit_search();
            print_results(api, &result, out)?;
        }
        BrowseCommand::Close => api.dismiss_suggestions(),
        BrowseCommand::Search(text) => {
            let result = api.set_search(text);
            print_results(api, &result, out)?;
        }
        BrowseCommand::Consult(consultation_type) => {
            let result = api.set_consultation_type(consultation_type);
            print_results(api, &result, out)?;
        }
        BrowseCommand::Spec(name) => match api.toggle_speciality(&name) {
            Ok(result) => print_results(api, &result, out)?,
            Err(e) => writeln!(out, "{}", e)?,
        },
        BrowseCommand::Specs => {
            let available = api.available_specialities();
            write!(
                out,
                "{}",
                render_specialities(&available.specialities, &api.filters().specialities)
            )?;
        }
        BrowseCommand::Sort(sort_by) => {
            let result = api.set_sort_by(sort_by);
            print_results(api, &result, out)?;
        }
        BrowseCommand::Reset => {
            let result = api.reset();
            print_results(api, &result, out)?;
        }
        BrowseCommand::Show => {
            write!(out, "{}", render_filters(api.filters()))?;
            let result = api.results();
            print_results(api, &result, out)?;
        }
        BrowseCommand::Url => write!(out, "{}", render_url(&api.page_url()))?,
        BrowseCommand::Help => write!(out, "{}", HELP)?,
        BrowseCommand::Quit => {}
    }
    Ok(())
}

fn print_results<W: Write>(api: &CliApi, result: &CmdResult, out: &mut W) -> Result<()> {
    match api.status() {
        LoadStatus::Failed(message) => write!(out, "{}", render_error_panel(message))?,
        LoadStatus::Loading => writeln!(out, "Loading...")?,
        LoadStatus::Ready(_) => {
            write!(
                out,
                "{}",
                render_summary(result.doctors.len(), api.filters().sort_by)
            )?;
            write!(out, "{}", render_doctor_list(&result.doctors))?;
        }
    }
    write!(out, "{}", render_url(&api.page_url()))?;
    Ok(())
}
