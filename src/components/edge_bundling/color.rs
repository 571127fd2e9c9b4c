/// Discrete fill colour of a node, by participation severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillTier {
	AllHealth,
	Low,
	Mid,
	High,
	Extra,
}

impl FillTier {
	pub fn color(self) -> &'static str {
		match self {
			FillTier::AllHealth => "#85DFAD",
			FillTier::Low => "#ffa59f",
			FillTier::Mid => "#ff584c",
			FillTier::High => "#d42d3d",
			FillTier::Extra => "#a8002d",
		}
	}
}

pub fn severity_color(value: Option<f64>) -> FillTier {
	match value {
		None => FillTier::AllHealth,
		// NaN counts as absent
		Some(v) if v == 0.0 || v.is_nan() => FillTier::AllHealth,
		Some(v) if v < 20.0 => FillTier::Low,
		Some(v) if v < 50.0 => FillTier::Mid,
		Some(v) if v < 70.0 => FillTier::High,
		Some(_) => FillTier::Extra,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tier_boundaries() {
		assert_eq!(severity_color(None), FillTier::AllHealth);
		assert_eq!(severity_color(Some(0.0)), FillTier::AllHealth);
		assert_eq!(severity_color(Some(f64::NAN)), FillTier::AllHealth);
		assert_eq!(severity_color(Some(0.5)), FillTier::Low);
		assert_eq!(severity_color(Some(19.99)), FillTier::Low);
		assert_eq!(severity_color(Some(20.0)), FillTier::Mid);
		assert_eq!(severity_color(Some(49.9)), FillTier::Mid);
		assert_eq!(severity_color(Some(50.0)), FillTier::High);
		assert_eq!(severity_color(Some(70.0)), FillTier::Extra);
		assert_eq!(severity_color(Some(100.0)), FillTier::Extra);
	}

	#[test]
	fn test_tier_colors_are_distinct() {
		let tiers = [
			FillTier::AllHealth,
			FillTier::Low,
			FillTier::Mid,
			FillTier::High,
			FillTier::Extra,
		];
		let colors: std::collections::HashSet<_> = tiers.iter().map(|t| t.color()).collect();
		assert_eq!(colors.len(), tiers.len());
	}
}
