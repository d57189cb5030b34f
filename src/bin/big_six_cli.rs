// src/bin/big_six_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use big_six_wheel::api::{build_history_item, build_wheel_view, HistoryRecordDto};
use big_six_wheel::domain::SessionConfig;
use big_six_wheel::engine::{HistoryRecord, Ledger, SpinAnimation, SpinError, Wagers};
use big_six_wheel::infra::{init_logging, SessionRng};

/// Параметры командной строки.
#[derive(Parser)]
#[command(name = "big_six_cli", about = "Интерактивная сессия Big Six Wheel")]
struct CliArgs {
    /// JSON-конфиг сессии (начальный баланс, seed, обороты анимации)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed детерминированного RNG (перекрывает значение из конфига)
    #[arg(long)]
    seed: Option<u64>,

    /// Показывать текстовую анимацию вращения
    #[arg(long)]
    animate: bool,
}

fn main() {
    init_logging();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => match SessionConfig::from_json_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[CLI] {e}");
                std::process::exit(2);
            }
        },
        None => SessionConfig::default(),
    };
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }

    let ledger = Ledger::from_config(&config);
    let mut wagers = Wagers::new();

    println!("=== BIG SIX WHEEL ===");
    println!("Баланс: {}", ledger.balance());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("[CLI] Ошибка чтения stdin: {e}");
                break;
            }
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match cmd {
            "bet" => place_bet(&ledger, &mut wagers, rest),
            "clear" => {
                if rest.is_empty() {
                    wagers.clear();
                    println!("Все ставки очищены.");
                } else if wagers.remove(rest).is_some() {
                    println!("Ставка на {rest} очищена.");
                } else {
                    println!("Ставки на {rest} не было.");
                }
            }
            "bets" => print_wagers(&wagers),
            "spin" => spin(&ledger, &wagers, &config, args.animate),
            "deposit" => match parse_amount(rest) {
                Some(amount) => match ledger.deposit(amount) {
                    Ok(()) => println!("Баланс: {}", ledger.balance()),
                    Err(e) => println!("Ошибка депозита: {e}"),
                },
                None => println!("Некорректная сумма депозита."),
            },
            "withdraw" => match parse_amount(rest) {
                Some(amount) => match ledger.withdraw(amount) {
                    Ok(()) => println!("Баланс: {}", ledger.balance()),
                    Err(e) => println!("Ошибка вывода: {e}"),
                },
                None => println!("Некорректная сумма вывода."),
            },
            "balance" => println!("Баланс: {}", ledger.balance()),
            "history" => {
                let history = ledger.history();
                if history.is_empty() {
                    println!("История пуста.");
                }
                for record in &history {
                    println!("{}", format_history_line(&build_history_item(record)));
                }
            }
            "wheel" => print_wheel(&ledger),
            "json" => {
                let items: Vec<HistoryRecordDto> =
                    ledger.history().iter().map(build_history_item).collect();
                match serde_json::to_string_pretty(&items) {
                    Ok(s) => println!("{s}"),
                    Err(e) => eprintln!("[CLI] Ошибка сериализации: {e}"),
                }
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Неизвестная команда: {other} (help: список команд)"),
        }
    }

    println!("Итоговый баланс: {}", ledger.balance());
}

fn print_help() {
    println!("Команды:");
    println!("  bet <метка> <сумма>   поставить на категорию (например: bet 50 Joker 5)");
    println!("  clear [метка]         очистить одну или все ставки");
    println!("  bets                  показать текущие ставки");
    println!("  spin                  крутить колесо");
    println!("  deposit <сумма>       пополнить баланс");
    println!("  withdraw <сумма>      вывести с баланса");
    println!("  balance | history | wheel | json | help | quit");
}

/// Разбор суммы как в окне ставок: дробная часть отбрасывается, пусто = 0.
fn parse_amount(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

/// `bet <метка> <сумма>`: сумма в последнем токене, всё до неё считается меткой.
fn place_bet(ledger: &Ledger<SessionRng>, wagers: &mut Wagers, rest: &str) {
    let Some((label, raw_amount)) = rest.rsplit_once(char::is_whitespace) else {
        println!("Формат: bet <метка> <сумма>");
        return;
    };
    let label = label.trim();

    if !ledger.layout().has_category(label) {
        println!("Нет такой категории: {label}");
        return;
    }

    match parse_amount(raw_amount) {
        Some(amount) => {
            wagers.insert(label.to_string(), amount);
            print_wagers(wagers);
        }
        None => println!("Некорректная ставка на {label}"),
    }
}

fn print_wagers(wagers: &Wagers) {
    if wagers.is_empty() {
        println!("Ставок нет.");
        return;
    }
    let parts: Vec<String> = wagers.iter().map(|(l, a)| format!("{l}:{a}")).collect();
    println!("Ставки: {}", parts.join(", "));
}

fn spin(ledger: &Ledger<SessionRng>, wagers: &Wagers, config: &SessionConfig, animate: bool) {
    match ledger.spin(wagers) {
        Ok(record) => {
            if animate {
                play_animation(ledger, &record, config.spin_rounds);
            }
            println!("{}", format_history_line(&build_history_item(&record)));
        }
        Err(SpinError::Bet(e)) => println!("Ставка отклонена: {e}"),
        Err(e) => println!("Ошибка спина: {e}"),
    }
}

/// Текстовая "анимация": бежим по секторам и останавливаемся на уже известном исходе.
fn play_animation(ledger: &Ledger<SessionRng>, record: &HistoryRecord, rounds: u32) {
    let layout = ledger.layout();
    let plan = SpinAnimation::plan(record.outcome.position, layout.len(), rounds);

    for frame in plan.frames() {
        let label = layout
            .segment(frame.highlight)
            .map(|s| s.label.as_str())
            .unwrap_or("?");
        print!("\r  [{:>2}] {:<10}", frame.highlight, label);
        let _ = io::stdout().flush();
        std::thread::sleep(Duration::from_secs_f64(frame.delay_ms / 1000.0));
    }
    println!();
}

fn format_history_line(item: &HistoryRecordDto) -> String {
    let bets: Vec<String> = item
        .bets
        .iter()
        .map(|b| format!("{}:{}", b.label, b.amount.0))
        .collect();

    let mut line = format!(
        "{}. Bets: {} | Landed on {} | ",
        item.seq,
        bets.join(", "),
        item.outcome_label
    );

    if !item.won.is_empty() {
        let won: Vec<String> = item
            .won
            .iter()
            .map(|w| format!("{}+{}", w.label, w.amount))
            .collect();
        line.push_str(&format!("Won: {} | ", won.join(", ")));
    }
    if !item.lost.is_empty() {
        let lost: Vec<String> = item
            .lost
            .iter()
            .map(|l| format!("{}-{}", l.label, l.amount))
            .collect();
        line.push_str(&format!("Lost: {} | ", lost.join(", ")));
    }

    line.push_str(&format!("Balance: {}", item.balance_after));
    line
}

fn print_wheel(ledger: &Ledger<SessionRng>) {
    let view = build_wheel_view(ledger.layout());

    println!("Секторов: {}", view.segment_count);
    let labels: Vec<&str> = view.segments.iter().map(|s| s.label.as_str()).collect();
    println!("{}", labels.join(" "));

    println!(
        "{:<10} {:>5} {:>6} {:>8} {:>8} {:>8}",
        "категория", "x", "секторов", "P", "возврат", "цвет"
    );
    for c in &view.categories {
        println!(
            "{:<10} {:>5} {:>6} {:>8.4} {:>8.4} {:>8}",
            c.name, c.multiplier, c.member_count, c.win_probability, c.expected_return, c.color
        );
    }
}
