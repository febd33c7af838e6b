/// Fixed pool of plausible but unrelated Polish translations.
///
/// Used to pad out quiz options when the user's own collection cannot
/// supply three unique distractors. Loaded once, never mutated.
pub const DISTRACTOR_TRANSLATIONS: [&str; 61] = [
    "Sceptyczny, wątpliwy",
    "Powierzchowny, płytki",
    "Spontaniczny, żywiołowy",
    "Konwencjonalny, tradycyjny",
    "Marginalny, drugorzędny",
    "Arbitralny, samowolny",
    "Tymczasowy, przejściowy",
    "Ewentualny, możliwy",
    "Definitywny, ostateczny",
    "Względny, proporcjonalny",
    "Abstrakcyjny, teoretyczny",
    "Konkretny, rzeczywisty",
    "Uniwersalny, powszechny",
    "Specjalny, szczególny",
    "Ogólny, powszechny",
    "Indywidualny, osobisty",
    "Zbiorowy, grupowy",
    "Lokalny, miejscowy",
    "Globalny, światowy",
    "Regionalny, obszarowy",
    "Narodowy, krajowy",
    "Międzynarodowy, zagraniczny",
    "Formalny, oficjalny",
    "Nieformalny, nieoficjalny",
    "Publiczny, społeczny",
    "Prywatny, osobisty",
    "Komercyjny, handlowy",
    "Naukowy, badawczy",
    "Praktyczny, użyteczny",
    "Teoretyczny, abstrakcyjny",
    "Empiryczny, doświadczalny",
    "Systematyczny, metodyczny",
    "Przypadkowy, losowy",
    "Celowy, zamierzony",
    "Automatyczny, samoczynny",
    "Manualny, ręczny",
    "Cyfrowy, elektroniczny",
    "Analogowy, ciągły",
    "Mechaniczny, maszynowy",
    "Organiczny, naturalny",
    "Sztuczny, syntetyczny",
    "Klasyczny, tradycyjny",
    "Nowoczesny, współczesny",
    "Archaiczny, przestarzały",
    "Przyszłościowy, futurystyczny",
    "Historyczny, dawny",
    "Współczesny, aktualny",
    "Pierwotny, początkowy",
    "Końcowy, ostateczny",
    "Pośredni, średni",
    "Bezpośredni, wprost",
    "Ewidentny, oczywisty",
    "Ukryty, skryty",
    "Jasny, przejrzysty",
    "Niejasny, mętny",
    "Klarowny, zrozumiały",
    "Skomplikowany, złożony",
    "Prosty, łatwy",
    "Trudny, ciężki",
    "Możliwy, osiągalny",
    "Niemożliwy, nieosiągalny",
];
