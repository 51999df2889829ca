use chrono::{Datelike, Local, NaiveDate};
use leptos::*;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Fixed reminders shown beside the grid
const EVENTS: [(&str, &str); 5] = [
    ("Mar 31", "Deadline for revised and belated income tax returns"),
    ("Apr 01", "New financial year; revised tax slabs take effect"),
    ("Apr 15", "Q1 advance tax installment due"),
    ("Jun 15", "Q1 earnings season opens"),
    ("Jul 31", "Income tax return filing deadline"),
];

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
        _ => "December",
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

/// Month laid out as Monday-first weeks; `None` cells pad the edges
fn month_grid(year: i32, month: u32) -> Vec<Vec<Option<u32>>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let lead = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(year, month);

    let mut cells: Vec<Option<u32>> = vec![None; lead];
    cells.extend((1..=days).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells.chunks(7).map(|week| week.to_vec()).collect()
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Month-view calendar with a fixed list of financial dates
#[component]
pub fn CalendarPage() -> impl IntoView {
    let today = Local::now().date_naive();
    let (shown, set_shown) = create_signal((today.year(), today.month()));

    let heading = move || {
        let (year, month) = shown.get();
        format!("{} {}", month_name(month), year)
    };

    let weeks = move || {
        let (year, month) = shown.get();
        let current_day =
            (year == today.year() && month == today.month()).then(|| today.day());

        month_grid(year, month)
            .into_iter()
            .map(|week| {
                let cells = week
                    .into_iter()
                    .map(|cell| match cell {
                        Some(day) if current_day == Some(day) => {
                            view! { <td class="calendar-day today">{day}</td> }
                        }
                        Some(day) => view! { <td class="calendar-day">{day}</td> },
                        None => view! { <td class="calendar-day empty"></td> },
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Calendar"</h2>
                <p class="page-subtitle">"Key financial dates"</p>
            </div>

            <div class="calendar-layout">
                <div class="card calendar-card">
                    <div class="calendar-header">
                        <button
                            class="icon-button"
                            aria-label="Previous month"
                            on:click=move |_| set_shown.update(|s| *s = prev_month(s.0, s.1))
                        >
                            "\u{2039}"
                        </button>
                        <span class="calendar-title">{heading}</span>
                        <button
                            class="icon-button"
                            aria-label="Next month"
                            on:click=move |_| set_shown.update(|s| *s = next_month(s.0, s.1))
                        >
                            "\u{203a}"
                        </button>
                    </div>
                    <table class="calendar-grid">
                        <thead>
                            <tr>
                                {WEEKDAYS
                                    .iter()
                                    .map(|day| view! { <th>{*day}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>{weeks}</tbody>
                    </table>
                </div>

                <div class="card events-card">
                    <h3>"Reminders"</h3>
                    <ul class="event-list">
                        {EVENTS
                            .iter()
                            .map(|(date, label)| {
                                view! {
                                    <li>
                                        <span class="event-date">{*date}</span>
                                        <span>{*label}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn grid_weeks_are_always_full() {
        let grid = month_grid(2025, 1);
        assert!(grid.iter().all(|week| week.len() == 7));

        let days: Vec<u32> = grid.iter().flatten().filter_map(|c| *c).collect();
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&31));
        assert_eq!(days.len(), 31);
    }

    #[test]
    fn grid_leads_with_blanks_up_to_the_first_weekday() {
        // 2025-01-01 fell on a Wednesday
        let grid = month_grid(2025, 1);
        assert_eq!(grid[0][0], None);
        assert_eq!(grid[0][1], None);
        assert_eq!(grid[0][2], Some(1));
    }

    #[test]
    fn month_navigation_wraps_at_year_edges() {
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 6), (2025, 7));
    }
}
