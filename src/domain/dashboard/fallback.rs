//! Static dashboard shown whenever a generated state is unavailable.

use super::state::{
    Achievement, Alert, AlertType, DashboardState, PlatformStat, SentimentPoint, Trend,
};

impl DashboardState {
    /// The designated fallback state.
    ///
    /// Generic rather than scenario specific: a healthy brand with one
    /// brewing incident.
    pub fn fallback() -> Self {
        Self {
            level: 7,
            current_xp: 2340,
            max_xp: 3000,
            vibe_score: 72,
            streak: 3,
            total_mentions: 1420,
            reach: "2.4M".to_string(),
            alerts: vec![
                Alert {
                    id: "1".to_string(),
                    alert_type: AlertType::Critical,
                    message: "Viral TikTok detected: 50K views in 30 minutes".to_string(),
                    time: "2 min ago".to_string(),
                    impact: "-12% sentiment".to_string(),
                    source: None,
                    xp: Some(25),
                },
                Alert {
                    id: "2".to_string(),
                    alert_type: AlertType::Warning,
                    message: "Reddit thread gaining traction".to_string(),
                    time: "15 min ago".to_string(),
                    impact: "Monitoring".to_string(),
                    source: None,
                    xp: None,
                },
            ],
            achievements: vec![
                achievement("Crisis Defender", 150, "shield"),
                achievement("Sentiment Booster", 100, "trending-up"),
            ],
            platforms: vec![
                platform("TikTok", 34, Trend::Up, [20, 40, 35, 50, 80]),
                platform("Reddit", 22, Trend::Down, [60, 55, 40, 30, 22]),
                platform("Google", 18, Trend::Up, [15, 16, 16, 17, 18]),
                platform("Twitter", 15, Trend::Down, [30, 25, 20, 18, 15]),
            ],
            sentiment_history: [
                ("10:00", 68),
                ("11:00", 70),
                ("12:00", 75),
                ("13:00", 72),
                ("14:00", 65),
                ("15:00", 60),
                ("16:00", 72),
            ]
            .into_iter()
            .map(|(time, score)| SentimentPoint {
                time: time.to_string(),
                score,
            })
            .collect(),
        }
    }
}

fn achievement(name: &str, xp: i32, icon: &str) -> Achievement {
    Achievement {
        name: name.to_string(),
        xp,
        icon: icon.to_string(),
    }
}

fn platform(name: &str, percentage: i32, trend: Trend, data: [i32; 5]) -> PlatformStat {
    PlatformStat {
        name: name.to_string(),
        percentage,
        trend,
        data: data.to_vec(),
    }
}
