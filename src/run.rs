//! Run planning and orchestration.
//!
//! A run has no persistent state machine of its own; everything is decided
//! from the wall clock at run start. [`decide_actions`] is a pure function
//! so the rollover and grace-window rules stay unit-testable without
//! touching real time, and [`run`] executes the resulting plan against the
//! live services.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use reqwest::Client;

use crate::{
    Res,
    config::{self, ConfigStore},
    management::{credentials, registry, router, router::Routed},
    reddit,
    store::Store,
    success,
    types::Scope,
    warning, wiki,
};

/// One wiki page worth of work: which month to parse and whether its
/// releases also belong in the Current playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopePass {
    pub month: String,
    pub year: i32,
    pub include_current: bool,
}

/// Everything a run decided to do, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub clear_current: bool,
    pub passes: Vec<ScopePass>,
}

/// Decides what a run starting at `now` must do.
///
/// The scheduler fires every 15 minutes, so the first run of a month is the
/// one with day 1, hour 0, minute < 15; only that run empties the Current
/// playlist. The current month is always processed. During the first seven
/// days of a month the previous month's page is processed too, since
/// releases still trickle into it after the switch; that pass skips the
/// Current playlist because its data is no longer current. A January run
/// wraps the previous month back to December of the prior year.
pub fn decide_actions(now: NaiveDateTime) -> RunPlan {
    let clear_current = now.day() == 1 && now.hour() == 0 && now.minute() < 15;

    let mut passes = vec![ScopePass {
        month: month_name(now.month()).to_string(),
        year: now.year(),
        include_current: true,
    }];

    if now.day() <= 7 {
        let (previous_month, previous_year) = if now.month() == 1 {
            (12, now.year() - 1)
        } else {
            (now.month() - 1, now.year())
        };
        passes.push(ScopePass {
            month: month_name(previous_month).to_string(),
            year: previous_year,
            include_current: false,
        });
    }

    RunPlan {
        clear_current,
        passes,
    }
}

/// Executes one full sync run.
///
/// Credentials are refreshed first, then the rollover check, then each
/// planned pass. A failure aborts the remainder of its own pass only; the
/// grace-window pass is still attempted so one broken wiki page cannot
/// starve the other. The first error is reported once all passes have had
/// their chance.
pub async fn run() -> Res<()> {
    let mut config = ConfigStore::open().await?;
    let mut store = Store::open().await?;
    let client = build_client(&config)?;

    credentials::refresh_primary(&client, &mut config).await?;

    let now = Local::now().naive_local();
    let plan = decide_actions(now);

    if plan.clear_current {
        registry::clear_current(&client, &config, &store).await?;
        success!("Emptied the Current playlist for the new month");
    }

    let wiki_token = credentials::secondary_token(&client, &mut config, now).await?;

    let mut first_error = None;
    for pass in &plan.passes {
        if let Err(e) = run_pass(&client, &config, &mut store, &wiki_token, pass).await {
            warning!("{} {} pass aborted: {}", pass.month, pass.year, e);
            if first_error.is_none() {
                first_error = Some(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

async fn run_pass(
    client: &Client,
    config: &ConfigStore,
    store: &mut Store,
    wiki_token: &str,
    pass: &ScopePass,
) -> Res<()> {
    let month_scope = Scope::Month {
        month: pass.month.clone(),
        year: pass.year,
    };

    let mut targets = vec![
        registry::create_or_fetch(client, config, store, &month_scope).await?,
        registry::create_or_fetch(client, config, store, &Scope::Year(pass.year)).await?,
    ];
    if pass.include_current {
        targets.push(registry::create_or_fetch(client, config, store, &Scope::Current).await?);
    }

    let content = reddit::wiki_page(client, config, wiki_token, &pass.month, pass.year).await?;

    let mut added = 0;
    let mut tracks_added = 0;
    let mut seen = 0;
    for url in wiki::release_urls(&content) {
        match router::route(client, config, store, &url, &targets).await? {
            Routed::AlreadySeen => seen += 1,
            Routed::Added { tracks } => {
                added += 1;
                tracks_added += tracks;
            }
        }
    }

    if added == 0 && seen == 0 {
        warning!("No releases found in the {} {} wiki table", pass.month, pass.year);
    } else {
        success!(
            "{} {}: {} new release(s) with {} track(s) routed, {} already processed",
            pass.month,
            pass.year,
            added,
            tracks_added,
            seen
        );
    }

    Ok(())
}

fn build_client(config: &ConfigStore) -> Res<Client> {
    let user_agent = config.get(config::USER_AGENT)?;
    Ok(Client::builder().user_agent(user_agent).build()?)
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => unreachable!("chrono months are 1-12"),
    }
}
