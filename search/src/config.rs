use evaluation::EvalConfig;
use std::fmt::Display;
use std::str::FromStr;

macro_rules! define_config {
    ($(($field:ident: $type:ty, $name:literal, $default:expr, $min:expr, $max:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct EngineConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for EngineConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        name: $name,
                        value: $default,
                        min: $min,
                        max: $max,
                    },)*
                }
            }
        }

        impl EngineConfig {
            /// Sets a parameter by name, rejecting unparsable or out-of-range values.
            pub fn update(&mut self, name: &str, value: &str) -> Result<(), String> {
                match name {
                    $($name => self.$field.update(value),)*
                    _ => Err(format!("Unknown parameter: {}", name)),
                }
            }

            /// One line per parameter: name, current value and allowed range.
            pub fn describe(&self) -> Vec<String> {
                vec![$(self.$field.describe(),)*]
            }
        }
    };
}

define_config!(
    // Transposition table size as log2 of the entry count
    (hash_size: u8, "hash_size", 19, 10, 26),

    // Time management
    (time_divisor: u64, "time_divisor", 25, 1, 200), // Share of the remaining clock spent on one move
    (min_depth: u8, "min_depth", 1, 1, 10), // Iterations up to this depth are never aborted

    // Aspiration Windows - Search with tight bounds around expected score
    (aspiration_window: i16, "aspiration_window", 50, 10, 500), // Half width in centipawns
    (aspiration_widen: i16, "aspiration_widen", 2, 2, 8), // Factor to widen window on fail
    (aspiration_retries: u8, "aspiration_retries", 3, 1, 10), // Failures before the window is fully opened
    (aspiration_min_depth: u8, "aspiration_min_depth", 2, 1, 20),

    // Null Move Pruning - Skip a turn to test position strength
    (nmp_min_depth: i16, "nmp_min_depth", 3, 1, 10),
    (nmp_base_reduction: i16, "nmp_base_reduction", 2, 1, 6),
    (nmp_depth_divisor: i16, "nmp_depth_divisor", 4, 1, 10),

    // Late Move Reduction - Reduce search depth for later quiet moves
    (lmr_min_depth: i16, "lmr_min_depth", 3, 2, 10),
    (lmr_min_moves: usize, "lmr_min_moves", 3, 1, 20),
    (lmr_divisor: i32, "lmr_divisor", 230, 100, 400), // Formula divisor (2.30 scaled by 100)

    // Check extensions granted along a single branch
    (max_extensions: u8, "max_extensions", 16, 0, 32),

    // Quiescence Search - Delta pruning
    (qs_delta_margin: i16, "qs_delta_margin", 200, 0, 1000),

    // Evaluation
    (knight_mobility_mg: i16, "knight_mobility_mg", 4, 0, 20),
    (knight_mobility_eg: i16, "knight_mobility_eg", 4, 0, 20),
    (bishop_mobility_mg: i16, "bishop_mobility_mg", 5, 0, 20),
    (bishop_mobility_eg: i16, "bishop_mobility_eg", 5, 0, 20),
    (rook_mobility_mg: i16, "rook_mobility_mg", 2, 0, 20),
    (rook_mobility_eg: i16, "rook_mobility_eg", 4, 0, 20),
    (queen_mobility_mg: i16, "queen_mobility_mg", 1, 0, 20),
    (queen_mobility_eg: i16, "queen_mobility_eg", 2, 0, 20),
    (bishop_pair_mg: i16, "bishop_pair_mg", 30, 0, 150),
    (bishop_pair_eg: i16, "bishop_pair_eg", 50, 0, 150),
);

impl EngineConfig {
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            knight_mobility_mg: self.knight_mobility_mg.value,
            knight_mobility_eg: self.knight_mobility_eg.value,
            bishop_mobility_mg: self.bishop_mobility_mg.value,
            bishop_mobility_eg: self.bishop_mobility_eg.value,
            rook_mobility_mg: self.rook_mobility_mg.value,
            rook_mobility_eg: self.rook_mobility_eg.value,
            queen_mobility_mg: self.queen_mobility_mg.value,
            queen_mobility_eg: self.queen_mobility_eg.value,

            bishop_pair_mg: self.bishop_pair_mg.value,
            bishop_pair_eg: self.bishop_pair_eg.value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub name: &'static str,
    pub value: T,
    pub min: T,
    pub max: T,
}

impl<T> ConfigParam<T>
where
    T: FromStr + Display + PartialOrd + Copy,
    T::Err: Display,
{
    pub fn update(&mut self, value: &str) -> Result<(), String> {
        let new_value = value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Parse error for {}: {}", self.name, e))?;

        if new_value < self.min || new_value > self.max {
            return Err(format!(
                "{} must be between {} and {}, got {}",
                self.name, self.min, self.max, new_value
            ));
        }

        self.value = new_value;
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!(
            "{} = {} (min {}, max {})",
            self.name, self.value, self.min, self.max
        )
    }
}
