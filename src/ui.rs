use crate::grid::CellState;
use crate::models::HabitId;
use crate::streaks::StreakStats;
use crate::window::MonthOffset;
use chrono::NaiveDate;
use std::fmt::Write;

const CELL_PITCH_PX: f32 = 13.0;

pub struct HabitView {
    pub id: HabitId,
    pub name: String,
    pub stats: StreakStats,
    pub months: Vec<MonthOffset>,
    pub cells: Vec<GridCell>,
}

pub struct GridCell {
    pub day: NaiveDate,
    pub state: CellState,
}

pub fn render_habits(habits: &[HabitView]) -> String {
    let cards: String = habits.iter().map(render_card).collect();
    INDEX_HTML.replace("{{CARDS}}", &cards)
}

fn render_card(view: &HabitView) -> String {
    let name = escape(&view.name);
    let badge_class = if view.stats.current > 0 {
        "badge active"
    } else {
        "badge"
    };

    format!(
        r#"<section class="habit" data-id="{id}">
  <div class="habit-top">
    <input class="name" value="{name}" data-saved="{name}" spellcheck="false" />
    <span class="{badge_class}">{current} day streak</span>
    <span class="longest">best {longest}</span>
    <span class="spacer"></span>
    <button class="tool move" data-dir="up" title="Move up">&#8593;</button>
    <button class="tool move" data-dir="down" title="Move down">&#8595;</button>
    <button class="tool delete" title="Delete habit">&#10005;</button>
  </div>
  <div class="scroll">
    <div class="months">{months}</div>
    <div class="grid">{cells}</div>
  </div>
</section>
"#,
        id = view.id,
        current = view.stats.current,
        longest = view.stats.longest,
        months = render_months(&view.months),
        cells = render_cells(&view.cells),
    )
}

fn render_months(months: &[MonthOffset]) -> String {
    let mut html = String::new();
    let mut prev_start = 0usize;
    for month in months {
        // Labels flow inline; each one is pushed right by the weeks elapsed
        // since the previous month started.
        let weeks = (month.start - prev_start) as f32 / 7.0;
        let margin = weeks * CELL_PITCH_PX;
        let _ = write!(
            html,
            r#"<span class="month" style="margin-left:{margin:.0}px">{label}</span>"#,
            label = escape(&month.label),
        );
        prev_start = month.start;
    }
    html
}

fn render_cells(cells: &[GridCell]) -> String {
    let mut html = String::new();
    for cell in cells {
        let (class, disabled) = match cell.state {
            CellState::Completed => ("cell completed", ""),
            CellState::Missed => ("cell", ""),
            CellState::Future => ("cell future", " disabled"),
        };
        let _ = write!(
            html,
            r#"<button class="{class}" data-day="{day}" title="{day}"{disabled}></button>"#,
            day = cell.day.format("%Y-%m-%d"),
        );
    }
    html
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>habits</title>
  <style>
    :root {
      --bg: #101413;
      --card: #1b211f;
      --card-edge: #262e2b;
      --ink: #e8ede9;
      --muted: #7d877f;
      --accent: #3fb950;
      --accent-dim: #2ea043;
      --missed: #2a332f;
      --danger: #e5534b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 28px;
      padding: 48px 16px 64px;
    }

    header {
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: 3.4rem;
      letter-spacing: -0.02em;
    }

    .tagline {
      margin: 6px 0 0;
      color: var(--muted);
    }

    #habits {
      display: flex;
      flex-direction: column;
      gap: 14px;
      width: min(780px, 100%);
    }

    .habit {
      background: var(--card);
      border: 1px solid var(--card-edge);
      border-radius: 12px;
      padding: 16px;
      display: flex;
      flex-direction: column;
      gap: 10px;
    }

    .habit-top {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .name {
      background: transparent;
      border: none;
      outline: none;
      color: var(--ink);
      font-size: 1.25rem;
      font-weight: 700;
      min-width: 1ch;
      flex: 0 1 auto;
    }

    .badge {
      flex-shrink: 0;
      background: var(--missed);
      color: var(--ink);
      border-radius: 8px;
      padding: 3px 8px;
      font-size: 0.72rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.06em;
    }

    .badge.active {
      background: var(--accent-dim);
    }

    .longest {
      flex-shrink: 0;
      color: var(--muted);
      font-size: 0.78rem;
    }

    .spacer {
      flex: 1;
    }

    .tool {
      background: transparent;
      border: none;
      border-radius: 6px;
      color: var(--muted);
      padding: 6px 8px;
      cursor: pointer;
      font-size: 0.9rem;
    }

    .tool:hover {
      background: var(--card-edge);
      color: var(--ink);
    }

    .delete:hover {
      color: var(--danger);
    }

    .scroll {
      overflow-x: auto;
      display: flex;
      flex-direction: column;
      gap: 4px;
      scrollbar-width: none;
    }

    .scroll::-webkit-scrollbar {
      display: none;
    }

    .months {
      display: flex;
      color: var(--muted);
      font-size: 0.72rem;
      white-space: nowrap;
    }

    .grid {
      display: grid;
      grid-auto-flow: column;
      grid-template-rows: repeat(7, 10px);
      gap: 3px;
      width: max-content;
    }

    .cell {
      width: 10px;
      height: 10px;
      padding: 0;
      border: none;
      border-radius: 2px;
      background: var(--missed);
      cursor: pointer;
    }

    .cell.completed {
      background: var(--accent);
    }

    .cell.future {
      background: transparent;
      cursor: default;
    }

    #create-form {
      display: flex;
      gap: 10px;
      width: min(780px, 100%);
    }

    #create-form input {
      flex: 1;
      background: var(--card);
      border: 1px solid var(--card-edge);
      border-radius: 10px;
      color: var(--ink);
      padding: 14px 16px;
      font-size: 1rem;
      outline: none;
    }

    #create-form button {
      background: var(--accent-dim);
      border: none;
      border-radius: 10px;
      color: white;
      font-weight: 700;
      padding: 14px 22px;
      cursor: pointer;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--danger);
    }
  </style>
</head>
<body>
  <header>
    <h1>habits</h1>
    <p class="tagline">Track your habits every day</p>
  </header>

  <div id="habits">{{CARDS}}</div>

  <form id="create-form">
    <input id="create-name" placeholder="New habit" autocomplete="off" />
    <button type="submit">Create</button>
  </form>

  <div class="status" id="status"></div>

  <script>
    const statusEl = document.getElementById('status');

    const setStatus = (message) => {
      statusEl.textContent = message || '';
    };

    const api = async (path, body) => {
      const res = await fetch(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const habitId = (card) => Number(card.dataset.id);

    const updateStreaks = (card, habit) => {
      const badge = card.querySelector('.badge');
      badge.textContent = habit.current_streak + ' day streak';
      badge.classList.toggle('active', habit.current_streak > 0);
      card.querySelector('.longest').textContent = 'best ' + habit.longest_streak;
    };

    const postOrder = () => {
      const order = Array.from(document.querySelectorAll('.habit')).map(habitId);
      api('/api/habits/reorder', { order }).catch((err) => setStatus(err.message));
    };

    document.addEventListener('click', (event) => {
      const cell = event.target.closest('.cell');
      if (cell && !cell.disabled) {
        const card = cell.closest('.habit');
        const wasCompleted = cell.classList.contains('completed');
        cell.classList.toggle('completed', !wasCompleted);
        api(wasCompleted ? '/api/habits/unlog' : '/api/habits/log', {
          id: habitId(card),
          day: cell.dataset.day
        })
          .then((habit) => updateStreaks(card, habit))
          .catch((err) => setStatus(err.message));
        return;
      }

      const move = event.target.closest('.move');
      if (move) {
        const card = move.closest('.habit');
        if (move.dataset.dir === 'up' && card.previousElementSibling) {
          card.parentNode.insertBefore(card, card.previousElementSibling);
          postOrder();
        } else if (move.dataset.dir === 'down' && card.nextElementSibling) {
          card.parentNode.insertBefore(card.nextElementSibling, card);
          postOrder();
        }
        return;
      }

      const del = event.target.closest('.delete');
      if (del) {
        if (!confirm('Delete this habit? Completions cannot be recovered.')) {
          return;
        }
        const card = del.closest('.habit');
        api('/api/habits/delete', { id: habitId(card) })
          .then(() => card.remove())
          .catch((err) => setStatus(err.message));
      }
    });

    document.addEventListener('focusout', (event) => {
      const input = event.target.closest('.name');
      if (!input || input.value === input.dataset.saved) {
        return;
      }
      const card = input.closest('.habit');
      api('/api/habits/rename', { id: habitId(card), name: input.value })
        .then((habit) => {
          input.dataset.saved = habit.name;
        })
        .catch((err) => setStatus(err.message));
    });

    document.addEventListener('keydown', (event) => {
      if (event.key === 'Enter' && event.target.closest('.name')) {
        event.preventDefault();
        event.target.blur();
      }
    });

    document.getElementById('create-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const name = document.getElementById('create-name').value;
      api('/api/habits', { name })
        .then(() => location.reload())
        .catch((err) => setStatus(err.message));
    });

    document.querySelectorAll('.scroll').forEach((el) => {
      el.scrollLeft = el.scrollWidth;
    });
  </script>
</body>
</html>
"##;
