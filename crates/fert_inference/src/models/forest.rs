use std::fmt;
use std::fs;
use std::path::Path;

use fert_core::{Classifier, Error, FeatureVector, Result, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Samples with `x[feature] <= threshold` go to `left`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Per-class weights, aligned with `RandomForest::classes`.
    Leaf { value: Vec<f64> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn leaf(&self, x: &[f64; FEATURE_COUNT]) -> Result<&[f64]> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = x.get(*feature).ok_or_else(|| {
                        Error::Inference(format!("split on unknown feature {}", feature))
                    })?;
                    let next = if *value <= *threshold { *left } else { *right };
                    if next <= index {
                        return Err(Error::Inference(format!(
                            "node {} points back to node {}",
                            index, next
                        )));
                    }
                    index = next;
                }
                Some(Node::Leaf { value }) => return Ok(value),
                None => {
                    return Err(Error::Inference(format!("node {} does not exist", index)));
                }
            }
        }
    }

    // Children must point forward, which rules out cycles and keeps
    // `leaf` from walking off the node list.
    fn validate(&self, tree: usize, n_features: usize, n_classes: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::Model(format!("tree {} has no nodes", tree)));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(Error::Model(format!(
                            "tree {} node {} splits on feature {} but the model has {} features",
                            tree, index, feature, n_features
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(Error::Model(format!(
                            "tree {} node {} has a non-finite threshold",
                            tree, index
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(Error::Model(format!(
                                "tree {} node {} has invalid child {}",
                                tree, index, child
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(Error::Model(format!(
                            "tree {} leaf {} has {} class weights, expected {}",
                            tree,
                            index,
                            value.len(),
                            n_classes
                        )));
                    }
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(Error::Model(format!(
                            "tree {} leaf {} has an invalid class weight",
                            tree, index
                        )));
                    }
                    if value.iter().sum::<f64>() <= 0.0 {
                        return Err(Error::Model(format!(
                            "tree {} leaf {} has no class weight",
                            tree, index
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A pretrained random forest classifier exported to JSON. Only
/// validated forests can be built outside this module.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    n_features: usize,
    classes: Vec<usize>,
    trees: Vec<Tree>,
}

impl fmt::Debug for RandomForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomForest")
            .field("n_features", &self.n_features)
            .field("classes", &self.classes.len())
            .field("trees", &self.trees.len())
            .finish()
    }
}

impl RandomForest {
    pub fn new(classes: Vec<usize>, trees: Vec<Tree>) -> Result<Self> {
        let forest = Self {
            n_features: FEATURE_COUNT,
            classes,
            trees,
        };
        forest.validate()?;
        Ok(forest)
    }

    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Model(format!("failed to read model {}: {}", path.display(), e))
        })?;
        let forest = Self::from_json(&raw)?;
        tracing::info!(
            "🌲 Loaded model from {} ({} trees, {} classes)",
            path.display(),
            forest.trees.len(),
            forest.classes.len()
        );
        Ok(forest)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let forest: RandomForest = serde_json::from_str(raw)?;
        forest.validate()?;
        Ok(forest)
    }

    fn validate(&self) -> Result<()> {
        if self.n_features != FEATURE_COUNT {
            return Err(Error::Model(format!(
                "model expects {} features, requests provide {}",
                self.n_features, FEATURE_COUNT
            )));
        }
        if self.classes.is_empty() {
            return Err(Error::Model("model has no classes".to_string()));
        }
        if self.trees.is_empty() {
            return Err(Error::Model("model has no trees".to_string()));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(index, self.n_features, self.classes.len())?;
        }
        Ok(())
    }

    /// Mean of the per-tree class probabilities.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let x = features.to_array();
        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            let leaf = tree.leaf(&x)?;
            let total: f64 = leaf.iter().sum();
            if total <= 0.0 {
                return Err(Error::Inference("leaf has no class weight".to_string()));
            }
            for (acc, weight) in proba.iter_mut().zip(leaf) {
                *acc += weight / total;
            }
        }
        let n_trees = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= n_trees);
        Ok(proba)
    }
}

impl Classifier for RandomForest {
    fn name(&self) -> &str {
        "RandomForest"
    }

    fn predict(&self, features: &FeatureVector) -> Result<usize> {
        let proba = self.predict_proba(features)?;
        // First maximum wins on ties.
        let best = proba
            .iter()
            .enumerate()
            .fold(0, |best, (i, p)| if *p > proba[best] { i } else { best });
        Ok(self.classes[best])
    }
}
