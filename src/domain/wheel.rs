//! Физическая раскладка колеса и логическая таблица выплат.
//!
//! Раскладка (упорядоченные сектора, метки могут повторяться) отделена от
//! таблицы выплат (уникальная метка → множитель). Частота метки на колесе
//! сама задаёт вероятность выигрыша, отдельных «весов» нигде нет.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::segment::{Segment, SegmentIndex};

/// Стандартное колесо Big Six: 54 сектора в угловом порядке.
pub const STANDARD_SEGMENTS: [&str; 54] = [
    "1", "3", "1", "6", "1", "3", "1", "12", "1", "6", "1", "3", "1", "25",
    "1", "3", "1", "6", "1", "12", "1", "3", "1", "3", "1", "3", "50 Joker",
    "1", "3", "1", "6", "1", "12", "1", "3", "1", "6", "1", "3", "1", "25",
    "1", "3", "1", "6", "1", "12", "1", "3", "6", "1", "3", "1", "50 Flag",
];

/// Таблица выплат стандартного колеса: (метка, множитель, цвет).
/// Порядок = порядок категорий в окне ставок.
pub const STANDARD_PAYTABLE: [(&str, u32, &str); 7] = [
    ("1", 1, "green"),
    ("3", 3, "skyblue"),
    ("6", 6, "yellow"),
    ("12", 12, "blue"),
    ("25", 25, "violet"),
    ("50 Joker", 50, "red"),
    ("50 Flag", 50, "gray"),
];

/// Ошибки сборки колеса.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WheelError {
    #[error("Колесо не может быть пустым")]
    EmptyWheel,

    #[error("Неизвестная категория ставки: {0}")]
    UnknownCategory(String),

    #[error("Множитель категории {label} должен быть >= 1, получено {multiplier}")]
    InvalidMultiplier { label: String, multiplier: u32 },

    #[error("Категория {0} объявлена в таблице выплат дважды")]
    DuplicateCategory(String),
}

/// Строка таблицы выплат, вход для `WheelLayout::new`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaytableEntry {
    pub name: String,
    pub multiplier: u32,
    /// Подсказка для отрисовки, на расчёт не влияет.
    pub color: String,
}

impl PaytableEntry {
    pub fn new(name: impl Into<String>, multiplier: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            multiplier,
            color: color.into(),
        }
    }
}

/// Категория, на которую можно ставить.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetCategory {
    pub name: String,
    /// Коэффициент выплаты: выигрыш = stake + stake * multiplier.
    pub multiplier: u32,
    /// Сколько физических секторов несут эту метку.
    /// Только для анализа честности, при выборе исхода не используется.
    pub member_count: usize,
    pub color: String,
}

impl BetCategory {
    /// Вероятность выпадения категории при равномерном выборе сектора.
    pub fn win_probability(&self, segment_count: usize) -> f64 {
        if segment_count == 0 {
            return 0.0;
        }
        self.member_count as f64 / segment_count as f64
    }
}

/// Неизменяемое колесо: сектора + производная таблица категорий.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WheelLayout {
    segments: Vec<Segment>,
    categories: Vec<BetCategory>,
}

impl WheelLayout {
    /// Собрать колесо из меток в угловом порядке и таблицы выплат.
    ///
    /// Проверяем:
    /// - колесо не пустое;
    /// - в таблице нет дублей и все множители >= 1;
    /// - каждая метка сектора есть в таблице.
    pub fn new<I, S>(labels: I, paytable: Vec<PaytableEntry>) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: Vec<BetCategory> = Vec::with_capacity(paytable.len());
        for entry in paytable {
            if entry.multiplier < 1 {
                return Err(WheelError::InvalidMultiplier {
                    label: entry.name,
                    multiplier: entry.multiplier,
                });
            }
            if categories.iter().any(|c| c.name == entry.name) {
                return Err(WheelError::DuplicateCategory(entry.name));
            }
            categories.push(BetCategory {
                name: entry.name,
                multiplier: entry.multiplier,
                member_count: 0,
                color: entry.color,
            });
        }

        let mut segments = Vec::new();
        for (position, label) in labels.into_iter().enumerate() {
            let label: String = label.into();
            let category = categories
                .iter_mut()
                .find(|c| c.name == label)
                .ok_or_else(|| WheelError::UnknownCategory(label.clone()))?;
            category.member_count += 1;
            segments.push(Segment::new(label, position));
        }

        if segments.is_empty() {
            return Err(WheelError::EmptyWheel);
        }

        Ok(Self {
            segments,
            categories,
        })
    }

    /// Стандартное колесо Big Six (54 сектора, 7 категорий).
    pub fn standard() -> Self {
        let paytable = STANDARD_PAYTABLE
            .iter()
            .map(|(name, mult, color)| PaytableEntry::new(*name, *mult, *color))
            .collect();

        match Self::new(STANDARD_SEGMENTS, paytable) {
            Ok(layout) => layout,
            // Литеральная таблица выше согласована, сюда не попадаем.
            Err(e) => unreachable!("standard wheel table is inconsistent: {e}"),
        }
    }

    /// Сектора в угловом порядке (для отрисовки).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: SegmentIndex) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Количество физических секторов N (> 0).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Всегда false: пустое колесо не собирается.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Уникальные категории в порядке таблицы выплат.
    pub fn categories(&self) -> &[BetCategory] {
        &self.categories
    }

    pub fn category(&self, label: &str) -> Option<&BetCategory> {
        self.categories.iter().find(|c| c.name == label)
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.category(label).is_some()
    }

    pub fn multiplier_of(&self, label: &str) -> Result<u32, WheelError> {
        self.category(label)
            .map(|c| c.multiplier)
            .ok_or_else(|| WheelError::UnknownCategory(label.to_string()))
    }

    /// Ожидаемый возврат на 1 фишку ставки: p * (1 + multiplier).
    pub fn expected_return(&self, label: &str) -> Result<f64, WheelError> {
        let category = self
            .category(label)
            .ok_or_else(|| WheelError::UnknownCategory(label.to_string()))?;
        let p = category.win_probability(self.len());
        Ok(p * (1.0 + f64::from(category.multiplier)))
    }

    /// Преимущество казино по категории (1 - ожидаемый возврат).
    pub fn house_edge(&self, label: &str) -> Result<f64, WheelError> {
        Ok(1.0 - self.expected_return(label)?)
    }
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self::standard()
    }
}
