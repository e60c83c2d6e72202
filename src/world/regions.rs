//! Named map regions consumed by the behavior scheduler
//!
//! The engine treats these as immutable geography supplied at startup:
//! rectangular districts, house plots, bed coordinates and the guard patrol
//! circuit. A table can be deserialized from JSON or built from the stock
//! village layout. Required entries are validated, never silently defaulted.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};
use crate::core::types::{Rect, Vec2};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionTable {
    pub map_width: f32,
    pub map_height: f32,

    pub inn: Rect,
    pub market: Rect,
    pub blacksmith: Rect,
    pub guild: Rect,
    pub docks: Rect,
    pub farm: Rect,
    pub guard_post: Rect,
    pub park: Rect,
    pub ranch: Rect,
    /// Social gathering point inside the inn
    pub bar_area: Rect,
    /// The two farmer sub-fields inside the farm district
    pub fields: [Rect; 2],
    /// Fishing water along the southern shore
    pub open_water: Rect,
    /// South of this line a fisher switches to the boat
    pub deep_water_y: f32,

    pub houses: Vec<Rect>,
    /// One bed per roster slot; index 0 is the player's
    pub beds: Vec<Vec2>,
    /// Guard patrol circuit, one point per corner of the guard post
    pub patrol_points: Vec<Vec2>,
}

impl RegionTable {
    /// The stock village layout
    pub fn village() -> Self {
        let inn = Rect::new(1000.0, 600.0, 300.0, 250.0);
        let guard_post = Rect::new(950.0, 300.0, 150.0, 150.0);

        let mut houses = Vec::with_capacity(10);
        for row_y in [100.0, 300.0] {
            for i in 0..5 {
                houses.push(Rect::new(100.0 + i as f32 * 150.0, row_y, 120.0, 120.0));
            }
        }

        let mut beds: Vec<Vec2> = houses.iter().map(|h| Vec2::new(h.x + 20.0, h.y + 20.0)).collect();
        for i in 0..6 {
            beds.push(Vec2::new(
                inn.x + 20.0 + (i % 3) as f32 * 60.0,
                inn.y + 20.0 + (i / 3) as f32 * 60.0,
            ));
        }

        let patrol_points = vec![
            Vec2::new(guard_post.x + 20.0, guard_post.y + 20.0),
            Vec2::new(guard_post.right() - 20.0, guard_post.y + 20.0),
            Vec2::new(guard_post.right() - 20.0, guard_post.bottom() - 20.0),
            Vec2::new(guard_post.x + 20.0, guard_post.bottom() - 20.0),
        ];

        Self {
            map_width: 2400.0,
            map_height: 1800.0,
            inn,
            market: Rect::new(950.0, 900.0, 400.0, 300.0),
            blacksmith: Rect::new(1400.0, 600.0, 200.0, 200.0),
            guild: Rect::new(1400.0, 850.0, 200.0, 200.0),
            docks: Rect::new(100.0, 1300.0, 300.0, 400.0),
            farm: Rect::new(1720.0, 100.0, 580.0, 600.0),
            guard_post,
            park: Rect::new(300.0, 600.0, 400.0, 400.0),
            ranch: Rect::new(2250.0, 150.0, 100.0, 500.0),
            bar_area: Rect::new(1020.0, 750.0, 260.0, 80.0),
            fields: [
                Rect::new(1750.0, 150.0, 200.0, 500.0),
                Rect::new(2000.0, 150.0, 200.0, 500.0),
            ],
            open_water: Rect::new(200.0, 1400.0, 600.0, 400.0),
            deep_water_y: 1150.0,
            houses,
            beds,
            patrol_points,
        }
    }

    /// Deserialize a table from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json)
            .map_err(|e| SimError::Config(format!("region table parse failed: {e}")))?;
        table.validate()?;
        Ok(table)
    }

    /// Where agents gather for the evening social hour
    pub fn social_hub(&self) -> Vec2 {
        self.bar_area.center()
    }

    /// Reject tables that cannot drive the scheduler
    pub fn validate(&self) -> Result<()> {
        if self.map_width <= 0.0 || self.map_height <= 0.0 {
            return Err(SimError::Config("map dimensions must be positive".into()));
        }

        let named = [
            ("inn", &self.inn),
            ("market", &self.market),
            ("blacksmith", &self.blacksmith),
            ("guild", &self.guild),
            ("docks", &self.docks),
            ("farm", &self.farm),
            ("guard_post", &self.guard_post),
            ("park", &self.park),
            ("ranch", &self.ranch),
            ("bar_area", &self.bar_area),
            ("open_water", &self.open_water),
        ];
        for (name, rect) in named {
            if rect.is_degenerate() {
                return Err(SimError::Config(format!("region '{name}' is degenerate: {rect:?}")));
            }
        }
        for (i, field) in self.fields.iter().enumerate() {
            if field.is_degenerate() {
                return Err(SimError::Config(format!("field {i} is degenerate: {field:?}")));
            }
        }

        if self.houses.is_empty() {
            return Err(SimError::Config("no houses defined".into()));
        }
        if self.beds.is_empty() {
            return Err(SimError::Config("no beds defined".into()));
        }
        if self.patrol_points.len() != 4 {
            return Err(SimError::Config(format!(
                "guard patrol needs exactly 4 points, got {}",
                self.patrol_points.len()
            )));
        }
        if self.deep_water_y <= 0.0 || self.deep_water_y >= self.map_height {
            return Err(SimError::Config(format!(
                "deep_water_y {} outside map",
                self.deep_water_y
            )));
        }
        Ok(())
    }
}
