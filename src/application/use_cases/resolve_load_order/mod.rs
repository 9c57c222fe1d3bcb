use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::ports::outbound::{DependencyQuery, DependencySource, ProgressReporter};
use crate::resolution::domain::{DependencyGraph, DependencyMap, LoadOrder, OrderComparison};
use crate::resolution::services::{GraphBuilder, LoadOrderResolver};
use crate::shared::error::DepOrderError;
use crate::shared::Result;

/// ResolveLoadOrderUseCase - Core use case of the tool
///
/// Loads dependency edges, builds the bounded graph, computes the load order
/// and, when asked, compares it with a reference order.
///
/// # Type Parameters
/// * `DS` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveLoadOrderUseCase<DS, PR> {
    dependency_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> ResolveLoadOrderUseCase<DS, PR>
where
    DS: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new ResolveLoadOrderUseCase with injected dependencies
    pub fn new(dependency_source: DS, progress_reporter: PR) -> Self {
        Self {
            dependency_source,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the dependency source fails as a whole or the
    /// root package is absent from what it returned. An order mismatch is
    /// not an error.
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        // Step 1: Load edges (all I/O happens here)
        let dependency_map = self.load_dependencies(&request)?;

        // Step 2: The root must be known to the source
        self.ensure_root_present(&request, &dependency_map)?;

        // Step 3: Bounded graph
        let graph = self.build_graph(&request, &dependency_map);

        // Step 4: Load order
        let load_order = self.compute_load_order(&request, &graph);

        // Step 5: Optional comparison
        let comparison = self.compare_if_requested(&request, &load_order);

        Ok(ResolveResponse::new(
            request.root,
            request.policy,
            graph,
            load_order,
            comparison,
        ))
    }

    fn load_dependencies(&self, request: &ResolveRequest) -> Result<DependencyMap> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependencies from: {}",
            self.dependency_source.describe()
        ));

        let query = DependencyQuery::new(
            request.root.clone(),
            request.version.clone(),
            request.policy.clone(),
        );
        self.dependency_source
            .load_dependencies(&query, &self.progress_reporter)
    }

    fn ensure_root_present(
        &self,
        request: &ResolveRequest,
        dependency_map: &DependencyMap,
    ) -> Result<()> {
        if dependency_map.contains_key(request.root.as_str()) {
            return Ok(());
        }

        Err(DepOrderError::RootNotFound {
            package: request.root.to_string(),
            source_description: self.dependency_source.describe(),
        }
        .into())
    }

    fn build_graph(&self, request: &ResolveRequest, dependency_map: &DependencyMap) -> DependencyGraph {
        self.progress_reporter
            .report("📊 Building dependency graph...");

        let graph = GraphBuilder::build(request.root.as_str(), dependency_map, &request.policy);

        self.progress_reporter
            .report(&format!("   - Packages: {}", graph.node_count()));
        self.progress_reporter
            .report(&format!("   - Edges: {}", graph.edge_count()));
        if graph.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Root package '{}' matches filter \"{}\"; the graph is empty.",
                request.root,
                request.policy.filter_substring()
            ));
        }

        graph
    }

    fn compute_load_order(&self, request: &ResolveRequest, graph: &DependencyGraph) -> LoadOrder {
        self.progress_reporter.report("🔗 Computing load order...");
        LoadOrderResolver::order(graph, request.root.as_str())
    }

    fn compare_if_requested(
        &self,
        request: &ResolveRequest,
        load_order: &LoadOrder,
    ) -> Option<OrderComparison> {
        let expected = request.expected_order.as_ref()?;
        let comparison = LoadOrderResolver::validate(load_order, expected);

        if comparison.is_match() {
            self.progress_reporter
                .report("✅ Load order matches the expected order");
        } else {
            self.progress_reporter
                .report_error("⚠️  Load order differs from the expected order (advisory only)");
        }

        Some(comparison)
    }
}
