use serde::{Deserialize, Serialize};

use crate::prelude::DetectionMode;

/// Fiber quality grade derived from the maturity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiberQuality {
    Premium,
    Good,
    Fair,
}

impl FiberQuality {
    pub fn label(&self) -> &'static str {
        match self {
            FiberQuality::Premium => "premium",
            FiberQuality::Good => "good",
            FiberQuality::Fair => "fair",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaturityStatus {
    Mature,
    Immature,
}

impl MaturityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MaturityStatus::Mature => "mature",
            MaturityStatus::Immature => "immature",
        }
    }
}

/// Harvest guidance attached to a maturity result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    HarvestWithinThreeDays,
    HarvestInFiveToSevenDays,
    ContinueGrowing,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::HarvestWithinThreeDays => "harvest within 3 days",
            Recommendation::HarvestInFiveToSevenDays => "harvest in 5-7 days",
            Recommendation::ContinueGrowing => "continue growing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChlorophyllStatus {
    Low,
    Normal,
    High,
}

impl ChlorophyllStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ChlorophyllStatus::Low => "low",
            ChlorophyllStatus::Normal => "normal",
            ChlorophyllStatus::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AntioxidantLevel {
    Strong,
    Moderate,
    Weak,
}

impl AntioxidantLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AntioxidantLevel::Strong => "strong",
            AntioxidantLevel::Moderate => "moderate",
            AntioxidantLevel::Weak => "weak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccumulationStage {
    Early,
    MidMaturation,
    FullyMature,
}

impl AccumulationStage {
    pub fn label(&self) -> &'static str {
        match self {
            AccumulationStage::Early => "early",
            AccumulationStage::MidMaturation => "mid maturation",
            AccumulationStage::FullyMature => "fully mature",
        }
    }
}

/// Maturity assessment: score on a 0-100 scale plus derived estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaturityResult {
    pub score: f32,
    pub boll_weight_g: f32,
    pub fiber_quality: FiberQuality,
    pub status: MaturityStatus,
    pub recommendation: Recommendation,
    pub confidence: f32,
}

/// Chlorophyll content estimate in mg/g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChlorophyllResult {
    pub chlorophyll_a: f32,
    pub chlorophyll_b: f32,
    pub total: f32,
    pub status: ChlorophyllStatus,
    pub confidence: f32,
}

/// Anthocyanin content estimate in mg/g.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthocyaninResult {
    pub content: f32,
    pub antioxidant: AntioxidantLevel,
    pub stage: AccumulationStage,
    pub confidence: f32,
}

/// Tagged result union keyed by the detection mode that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnalysisResult {
    Maturity(MaturityResult),
    Chlorophyll(ChlorophyllResult),
    Anthocyanin(AnthocyaninResult),
}

impl AnalysisResult {
    pub fn mode(&self) -> DetectionMode {
        match self {
            AnalysisResult::Maturity(_) => DetectionMode::Maturity,
            AnalysisResult::Chlorophyll(_) => DetectionMode::Chlorophyll,
            AnalysisResult::Anthocyanin(_) => DetectionMode::Anthocyanin,
        }
    }

    pub fn confidence(&self) -> f32 {
        match self {
            AnalysisResult::Maturity(r) => r.confidence,
            AnalysisResult::Chlorophyll(r) => r.confidence,
            AnalysisResult::Anthocyanin(r) => r.confidence,
        }
    }
}
