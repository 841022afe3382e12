use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use gradebook_page::dom::memory::MemoryForm;
use gradebook_page::dom::terminal::TerminalPage;
use gradebook_page::error::{ErrorKind, Result};
use gradebook_page::interface::HttpClient;
use gradebook_page::logging::init_logger;
use gradebook_page::model::dtos::FormFields;
use gradebook_page::model::structs::StudentId;
use gradebook_page::{
    AddStudent, DeleteConfirmation, NoWasmClient, PageConfig, SubmitDecision, SubmitOutcome,
};
use log::LevelFilter;

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

fn cli() -> Command {
    Command::new("gradebook-page")
        .about("Run the student roster page flows against a gradebook server")
        .subcommand_required(true)
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .value_name("URL")
                .help("Base URL of the gradebook server")
                .default_value(DEFAULT_SERVER)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON file overriding element ids, endpoints or messages")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log requests and page changes")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("add")
                .about("Submit the add-student form")
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .required(true),
                )
                .arg(
                    Arg::new("field")
                        .short('f')
                        .long("field")
                        .value_name("KEY=VALUE")
                        .help("Additional form field, e.g. email=ada@example.com")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Submit a student's delete form")
                .arg(Arg::new("id").long("id").value_name("ID").required(true))
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    init_logger(level);

    match run(&matches).await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(matches: &ArgMatches) -> Result<ExitCode> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => PageConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => PageConfig::default(),
    };
    let server = matches
        .get_one::<String>("server")
        .map(String::as_str)
        .unwrap_or(DEFAULT_SERVER);
    let client = NoWasmClient::new(server, &config.endpoints)?;

    match matches.subcommand() {
        Some(("add", sub)) => {
            let mut fields = FormFields::new();
            if let Some(name) = sub.get_one::<String>("name") {
                fields.push(config.dom.name_field.clone(), name.clone());
            }
            for field in sub.get_many::<String>("field").into_iter().flatten() {
                let (key, value) = field.split_once('=').ok_or_else(|| {
                    ErrorKind::ParseError(format!("expected KEY=VALUE, got `{field}`"))
                })?;
                fields.push(key, value);
            }

            let page = TerminalPage::new(config.dom.add_form.clone(), fields);
            let flow = AddStudent::new(client, config);
            Ok(match flow.submit(&page).await {
                SubmitOutcome::Added(_) => ExitCode::SUCCESS,
                SubmitOutcome::Rejected | SubmitOutcome::Refused(_) | SubmitOutcome::Failed(_) => {
                    ExitCode::FAILURE
                }
            })
        }
        Some(("delete", sub)) => {
            let id = sub
                .get_one::<String>("id")
                .map(|id| StudentId::from(id.as_str()))
                .ok_or_else(|| ErrorKind::ParseError("missing --id".to_string()))?;

            let page = TerminalPage::new(config.dom.add_form.clone(), FormFields::new())
                .assume_yes(sub.get_flag("yes"));
            let form = MemoryForm::new(config.endpoints.delete_url(&id))
                .with_class(config.dom.delete_form_class.clone());

            let decision = DeleteConfirmation::new(&config)
                .confirm_and_send(&client, &page, &form, &id)
                .await?;
            if decision == SubmitDecision::Prevent {
                log::info!("delete of {} cancelled", id);
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => Err(ErrorKind::ParseError("unknown command".to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn add_collects_repeated_fields() {
        let matches = cli()
            .try_get_matches_from([
                "gradebook-page",
                "add",
                "--name",
                "Ada",
                "-f",
                "email=ada@example.com",
                "-f",
                "grade_level=10",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(matches.get_one::<String>("server").unwrap(), DEFAULT_SERVER);
        assert_eq!(sub.get_many::<String>("field").unwrap().count(), 2);
    }
}
