use crate::view::TrackerView;

/// Categories offered by the entry form and the filter buttons.
pub static CATEGORIES: [&str; 7] = [
    "food",
    "transport",
    "shopping",
    "bills",
    "entertainment",
    "health",
    "other",
];

pub fn render_index(view: &TrackerView) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &view.today)
        .replace("{{TOTAL}}", &format_naira(view.summary.total))
        .replace("{{WEEK}}", &format_naira(view.summary.weekly))
        .replace("{{MONTH}}", &format_naira(view.summary.monthly))
        .replace("{{BUTTON_LABEL}}", view.form.button_label)
        .replace("{{CATEGORY_OPTIONS}}", &category_options())
        .replace("{{FILTER_BUTTONS}}", &filter_buttons())
}

/// Naira amount with thousands separators and at most two decimals.
pub fn format_naira(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{sign}₦{whole}"),
        frac if frac % 10 == 0 => format!("{sign}₦{whole}.{}", frac / 10),
        frac => format!("{sign}₦{whole}.{frac:02}"),
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

fn category_options() -> String {
    CATEGORIES
        .iter()
        .map(|category| format!(r#"<option value="{category}">{}</option>"#, capitalize(category)))
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn filter_buttons() -> String {
    CATEGORIES
        .iter()
        .map(|category| {
            format!(
                r#"<button type="button" class="filter-btn" data-category="{category}">{}</button>"#,
                capitalize(category)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Expense Tracker</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4ef;
      --bg-2: #bfe3cf;
      --ink: #1f2a24;
      --accent: #1f8a5b;
      --danger: #d64545;
      --muted: #6b7a71;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(31, 42, 36, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f7fbf8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .tracker-app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      transition: filter 200ms ease;
    }

    .tracker-app.blur-bg {
      filter: blur(3px);
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .summary {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(31, 42, 36, 0.08);
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      margin-top: 8px;
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
    }

    input, select {
      border: 1px solid rgba(31, 42, 36, 0.18);
      border-radius: 12px;
      padding: 12px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: white;
      color: var(--ink);
      border: 1px solid rgba(31, 42, 36, 0.18);
    }

    button.danger {
      background: var(--danger);
    }

    .input-err-message, .date-pick-err {
      display: none;
      color: var(--danger);
      margin: 0;
    }

    .input-err-message.show, .date-pick-err.show {
      display: block;
    }

    .shake {
      animation: shake 300ms ease;
    }

    .filters {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
    }

    .filter-btns, .date-picker-group {
      display: none;
      flex-wrap: wrap;
      gap: 8px;
      width: 100%;
    }

    .filter-btns.show, .date-picker-group.show {
      display: flex;
    }

    .filter-btn.active {
      background: var(--ink);
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 24px;
    }

    #transaction-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .transaction-display {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: white;
      border-radius: 14px;
      padding: 12px 16px;
    }

    .display-title {
      display: block;
      font-weight: 600;
    }

    .display-subscript {
      display: block;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .transaction-value {
      color: var(--danger);
      font-weight: 600;
      margin: 0;
    }

    .btn-group {
      display: flex;
      gap: 6px;
    }

    .btn-group button {
      padding: 6px 12px;
      font-size: 0.85rem;
    }

    .empty-state.hide, .details.hide, .details-list.hide {
      display: none;
    }

    .empty-canvas-msg {
      display: none;
      color: var(--muted);
    }

    .empty-canvas-msg.show {
      display: block;
    }

    .details-list {
      list-style: none;
      padding: 0;
    }

    .overlay {
      display: none;
      position: fixed;
      inset: 0;
      background: rgba(31, 42, 36, 0.35);
      place-items: center;
    }

    .overlay.show {
      display: grid;
    }

    #pop-up-box {
      background: white;
      border-radius: 20px;
      padding: 28px;
      display: grid;
      gap: 16px;
      max-width: 360px;
    }

    @keyframes shake {
      25% { transform: translateX(-4px); }
      75% { transform: translateX(4px); }
    }
  </style>
</head>
<body>
  <main class="tracker-app">
    <header>
      <h1>Expense Tracker</h1>
    </header>

    <section class="summary">
      <div class="stat"><span class="label">Total</span><span class="value totalExpensesValue">{{TOTAL}}</span></div>
      <div class="stat"><span class="label">This week</span><span class="value weekValue">{{WEEK}}</span></div>
      <div class="stat"><span class="label">This month</span><span class="value monthValue">{{MONTH}}</span></div>
    </section>

    <section>
      <h2>New expense</h2>
      <form id="user-input-form">
        <input id="transaction-description-input" placeholder="Description" />
        <input id="transaction-amount-input" type="number" min="0" step="0.01" placeholder="Amount" />
        <select id="category-input">
          <option value="">Category</option>
          {{CATEGORY_OPTIONS}}
        </select>
        <input id="date-input" type="date" value="{{TODAY}}" />
        <button id="add-transaction-btn" type="submit">{{BUTTON_LABEL}}</button>
        <button id="cancel-edit-btn" type="button" class="secondary" hidden>Cancel</button>
      </form>
      <p class="input-err-message">Please fill in every field with a positive amount.</p>
    </section>

    <section class="filters">
      <button type="button" class="secondary category-filter-reveal-btn">Category</button>
      <button type="button" class="secondary filter-reveal-btn">Date range</button>
      <button type="button" class="secondary" id="reset-filter-btn">Clear filters</button>
      <button type="button" class="danger reset-btn">Reset</button>
      <div class="filter-btns">
        {{FILTER_BUTTONS}}
      </div>
      <div class="date-picker-group">
        <input id="start-date-input" type="date" />
        <input id="end-date-input" type="date" />
        <p class="date-pick-err">Pick an end date to apply the range.</p>
      </div>
    </section>

    <section class="columns">
      <div class="transaction-display-box">
        <h2>Transactions</h2>
        <p class="empty-state">No expenses yet.</p>
        <ul id="transaction-list"></ul>
      </div>
      <div>
        <h2>By category</h2>
        <p class="empty-canvas-msg">Nothing to chart.</p>
        <div class="details">
          <canvas id="myChart"></canvas>
          <ul class="details-list"></ul>
        </div>
      </div>
    </section>
  </main>

  <div class="overlay">
    <div id="pop-up-box">
      <p>Delete every expense? This cannot be undone.</p>
      <div class="btn-group">
        <button type="button" class="secondary cancel-btn" id="cancel-btn">Cancel</button>
        <button type="button" class="danger ok-btn" id="ok-btn">Go ahead</button>
      </div>
    </div>
  </div>

  <script>
    const $ = (selector) => document.querySelector(selector);
    const form = $('#user-input-form');
    const descriptionInput = $('#transaction-description-input');
    const amountInput = $('#transaction-amount-input');
    const categoryInput = $('#category-input');
    const dateInput = $('#date-input');
    const submitBtn = $('#add-transaction-btn');
    const cancelEditBtn = $('#cancel-edit-btn');
    const errMsg = $('.input-err-message');
    const list = $('#transaction-list');
    const emptyMessage = $('.empty-state');
    const startDateInput = $('#start-date-input');
    const endDateInput = $('#end-date-input');
    const datePickErr = $('.date-pick-err');
    const filterBtns = $('.filter-btns');
    const datePickGroup = $('.date-picker-group');
    const overlay = $('.overlay');
    const app = $('.tracker-app');
    const emptyCanvasMsg = $('.empty-canvas-msg');
    const details = $('.details');
    const detailsList = $('.details-list');

    let chartInstance = null;
    let today = dateInput.value;

    const naira = (value) => `₦${Number(value).toLocaleString()}`;
    const capitalize = (word) => word.charAt(0).toUpperCase() + word.substring(1);

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (res.status === 422) {
        showInputError();
        return null;
      }
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const showInputError = () => {
      errMsg.classList.add('show', 'shake');
      setTimeout(() => errMsg.classList.remove('show', 'shake'), 2500);
    };

    const resetForm = () => {
      descriptionInput.value = '';
      amountInput.value = '';
      categoryInput.value = '';
      dateInput.value = today;
      errMsg.classList.remove('show');
    };

    const createExpenseNode = (expense) => {
      const li = document.createElement('li');
      li.className = 'transaction-display';
      li.dataset.id = expense.id;

      const text = document.createElement('div');
      const title = document.createElement('span');
      title.className = 'display-title';
      title.textContent = expense.description;
      const subscript = document.createElement('span');
      subscript.className = 'display-subscript';
      subscript.textContent = `${expense.date} | ${capitalize(expense.category)}`;
      text.append(title, subscript);

      const amount = document.createElement('p');
      amount.className = 'transaction-value';
      amount.textContent = `- ${naira(expense.amount)}`;

      const buttons = document.createElement('div');
      buttons.className = 'btn-group';
      const editBtn = document.createElement('button');
      editBtn.className = 'secondary edit-btn';
      editBtn.textContent = 'Edit';
      const deleteBtn = document.createElement('button');
      deleteBtn.className = 'danger delete-btn';
      deleteBtn.textContent = 'Delete';
      buttons.append(editBtn, deleteBtn);

      li.append(text, amount, buttons);
      return li;
    };

    const renderList = (expenses) => {
      list.innerHTML = '';
      emptyMessage.classList.toggle('hide', expenses.length > 0);
      expenses.forEach((expense) => list.appendChild(createExpenseNode(expense)));
    };

    const renderSummary = (summary) => {
      $('.totalExpensesValue').textContent = naira(summary.total);
      $('.weekValue').textContent = naira(summary.weekly);
      $('.monthValue').textContent = naira(summary.monthly);
    };

    const renderForm = (formView) => {
      submitBtn.textContent = formView.button_label;
      cancelEditBtn.hidden = formView.mode !== 'update';
      if (!formView.editing) return;
      descriptionInput.value = formView.editing.description;
      amountInput.value = formView.editing.amount;
      categoryInput.value = formView.editing.category;
      dateInput.value = formView.editing.date;
    };

    const renderChart = (breakdown) => {
      if (chartInstance) {
        chartInstance.destroy();
        chartInstance = null;
      }
      detailsList.innerHTML = '';
      if (breakdown.length === 0) {
        emptyCanvasMsg.classList.add('show');
        details.classList.add('hide');
        return;
      }
      emptyCanvasMsg.classList.remove('show');
      details.classList.remove('hide');

      if (window.Chart) {
        chartInstance = new Chart($('#myChart'), {
          type: 'doughnut',
          data: {
            labels: breakdown.map((item) => capitalize(item.category)),
            datasets: [{
              label: 'Total Expenses For This Category',
              data: breakdown.map((item) => item.amount)
            }]
          },
          options: {
            borderWidth: 5,
            borderRadius: 3,
            plugins: { legend: { display: false } }
          }
        });
      }

      breakdown.forEach((item) => {
        const li = document.createElement('li');
        li.textContent = `${capitalize(item.category)}: `;
        const span = document.createElement('span');
        span.textContent = naira(item.amount);
        li.appendChild(span);
        detailsList.appendChild(li);
      });
    };

    const renderFilters = (filter) => {
      document.querySelectorAll('.filter-btn').forEach((button) => {
        button.classList.toggle('active', button.dataset.category === filter.category);
      });
    };

    const render = (view) => {
      if (!view) return;
      today = view.today;
      renderList(view.expenses);
      renderSummary(view.summary);
      renderForm(view.form);
      renderChart(view.breakdown);
      renderFilters(view.filter);
    };

    const fail = (err) => console.error(err);

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const view = await request('POST', '/api/expenses', {
        description: descriptionInput.value,
        amount: amountInput.value,
        category: categoryInput.value,
        date: dateInput.value
      }).catch(fail);
      if (!view) return;
      resetForm();
      render(view);
      list.scrollIntoView({ behavior: 'smooth' });
    });

    cancelEditBtn.addEventListener('click', () => {
      resetForm();
      request('DELETE', '/api/editing').then(render).catch(fail);
    });

    list.addEventListener('click', (event) => {
      const li = event.target.closest('li');
      if (!li) return;
      const id = encodeURIComponent(li.dataset.id);
      if (event.target.closest('.delete-btn')) {
        request('DELETE', `/api/expenses/${id}`).then(render).catch(fail);
      }
      if (event.target.closest('.edit-btn')) {
        form.scrollIntoView({ behavior: 'smooth' });
        request('POST', `/api/expenses/${id}/edit`).then(render).catch(fail);
      }
    });

    $('.category-filter-reveal-btn').addEventListener('click', () => {
      datePickGroup.classList.remove('show');
      filterBtns.classList.toggle('show');
    });

    $('.filter-reveal-btn').addEventListener('click', () => {
      filterBtns.classList.remove('show');
      datePickGroup.classList.toggle('show');
    });

    filterBtns.addEventListener('click', (event) => {
      const button = event.target.closest('.filter-btn');
      if (!button) return;
      request('PUT', '/api/filters/category', { category: button.dataset.category })
        .then(render)
        .catch(fail);
    });

    startDateInput.addEventListener('change', () => {
      datePickErr.classList.add('show');
      setTimeout(() => datePickErr.classList.remove('show'), 2500);
    });

    endDateInput.addEventListener('change', () => {
      if (!startDateInput.value || !endDateInput.value) return;
      request('PUT', '/api/filters/date', {
        start_date: startDateInput.value,
        end_date: endDateInput.value
      }).then(render).catch(fail);
    });

    $('#reset-filter-btn').addEventListener('click', () => {
      startDateInput.value = '';
      endDateInput.value = '';
      request('DELETE', '/api/filters').then(render).catch(fail);
    });

    const showPopUp = () => {
      overlay.classList.add('show');
      app.classList.add('blur-bg');
    };

    const hidePopUp = () => {
      overlay.classList.remove('show');
      app.classList.remove('blur-bg');
    };

    $('.reset-btn').addEventListener('click', showPopUp);
    $('#cancel-btn').addEventListener('click', hidePopUp);
    overlay.addEventListener('click', (event) => {
      if (event.target === overlay) hidePopUp();
    });
    $('#ok-btn').addEventListener('click', () => {
      hidePopUp();
      request('DELETE', '/api/expenses').then(render).catch(fail);
    });

    request('GET', '/api/state').then(render).catch(fail);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackerState;
    use crate::view::build_view_at;
    use chrono::NaiveDate;

    #[test]
    fn naira_groups_thousands_and_trims_decimals() {
        assert_eq!(format_naira(0.0), "₦0");
        assert_eq!(format_naira(1500.0), "₦1,500");
        assert_eq!(format_naira(1_234_567.5), "₦1,234,567.5");
        assert_eq!(format_naira(12.34), "₦12.34");
        assert_eq!(format_naira(0.125), "₦0.13");
        assert_eq!(format_naira(999.999), "₦1,000");
    }

    #[test]
    fn capitalize_handles_empty_and_words() {
        assert_eq!(capitalize("food"), "Food");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn index_fills_every_placeholder() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let html = render_index(&build_view_at(today, &TrackerState::default()));
        assert!(!html.contains("{{"));
        assert!(html.contains(r#"value="2024-03-15""#));
        assert!(html.contains("Add Transaction"));
        assert!(html.contains(r#"data-category="transport""#));
        assert!(html.contains(r#"<option value="health">Health</option>"#));
    }
}
