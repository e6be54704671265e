use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="home-hero">
                <span class="home-hero-badge">{"DAF externalisé pour PME"}</span>
                <h1>{"Reprenez le pilotage de vos finances"}</h1>
                <p>
                    {"MSL Conseils structure la gestion financière des PME de 10 à 250 salariés : trésorerie prévisionnelle, tableaux de bord, automatisation comptable. Vos chiffres deviennent un outil de décision, pas une contrainte."}
                </p>
                <div class="home-hero-actions">
                    <Link<Route> to={Route::Ressources} classes="home-button primary">
                        {"Faire un diagnostic gratuit"}
                    </Link<Route>>
                    <Link<Route> to={Route::Methode} classes="home-button secondary">
                        {"Découvrir la méthode"}
                    </Link<Route>>
                </div>
            </section>

            <section class="home-pains">
                <h2>{"Ces situations vous parlent ?"}</h2>
                <div class="home-pain-grid">
                    <div class="home-pain-card">
                        <span class="home-pain-icon">{"💸"}</span>
                        <h3>{"Trésorerie subie"}</h3>
                        <p>{"Vous découvrez votre solde en consultant la banque, et les échéances fiscales tombent toujours au mauvais moment."}</p>
                    </div>
                    <div class="home-pain-card">
                        <span class="home-pain-icon">{"🌫️"}</span>
                        <h3>{"Rentabilité floue"}</h3>
                        <p>{"Le chiffre d'affaires progresse mais le résultat ne suit pas, et personne ne sait quel produit ou client gagne vraiment de l'argent."}</p>
                    </div>
                    <div class="home-pain-card">
                        <span class="home-pain-icon">{"⏱️"}</span>
                        <h3>{"Chiffres en retard"}</h3>
                        <p>{"Le bilan arrive six mois après la clôture. Quand les chiffres tombent, les décisions sont déjà prises."}</p>
                    </div>
                </div>
            </section>

            <section class="home-services">
                <h2>{"Ce que nous mettons en place"}</h2>
                <div class="home-service-list">
                    <div class="home-service">
                        <span class="home-service-number">{"01"}</span>
                        <div>
                            <h3>{"Pilotage de trésorerie"}</h3>
                            <p>{"Prévisionnel glissant à 13 semaines, suivi des encaissements et plan de financement pour anticiper plutôt que subir."}</p>
                        </div>
                    </div>
                    <div class="home-service">
                        <span class="home-service-number">{"02"}</span>
                        <div>
                            <h3>{"Tableaux de bord"}</h3>
                            <p>{"Les 5 à 8 indicateurs qui comptent pour votre activité, disponibles en quelques minutes chaque début de mois."}</p>
                        </div>
                    </div>
                    <div class="home-service">
                        <span class="home-service-number">{"03"}</span>
                        <div>
                            <h3>{"Automatisation comptable"}</h3>
                            <p>{"Factures, relevés bancaires et reporting connectés dans Odoo : moins de saisie, moins d'erreurs, des chiffres en temps réel."}</p>
                        </div>
                    </div>
                    <div class="home-service">
                        <span class="home-service-number">{"04"}</span>
                        <div>
                            <h3>{"Contrôle de gestion"}</h3>
                            <p>{"Rentabilité par produit, canal ou client, suivi budgétaire et analyse des écarts pour arbitrer en connaissance de cause."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="home-diagnostic">
                <div class="home-diagnostic-inner">
                    <h2>{"Où en est votre gestion ?"}</h2>
                    <p>
                        {"Nos auto-diagnostics gratuits mesurent la maturité de votre gestion en moins de 5 minutes : score global, lecture par axe et recommandations concrètes."}
                    </p>
                    <Link<Route> to={Route::GuideDafPme} classes="home-button primary">
                        {"Commencer le diagnostic DAF"}
                    </Link<Route>>
                </div>
            </section>

            <section class="home-cta">
                <h2>{"Parlons de vos chiffres"}</h2>
                <p>{"Premier échange de 30 minutes offert, sans engagement."}</p>
                <Link<Route> to={Route::Contact} classes="home-button primary">
                    {"Prendre rendez-vous"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .home-page {
                    padding-top: 74px;
                    background: #ffffff;
                    color: #1f2937;
                }

                .home-hero {
                    text-align: center;
                    padding: 7rem 2rem 6rem;
                    background: linear-gradient(135deg, #1a3c5e 0%, #2d5a8a 100%);
                }

                .home-hero-badge {
                    display: inline-block;
                    background: rgba(255, 255, 255, 0.15);
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 600;
                    padding: 0.4rem 1.1rem;
                    border-radius: 9999px;
                    margin-bottom: 1.5rem;
                }

                .home-hero h1 {
                    font-size: 3.25rem;
                    color: #ffffff;
                    max-width: 800px;
                    margin: 0 auto 1.5rem;
                }

                .home-hero p {
                    font-size: 1.2rem;
                    color: rgba(255, 255, 255, 0.75);
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                    line-height: 1.7;
                }

                .home-hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .home-button {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 12px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.2s;
                }

                .home-button.primary {
                    background: #fe981a;
                    color: #ffffff;
                }

                .home-button.primary:hover {
                    background: #e8870f;
                    box-shadow: 0 10px 20px rgba(254, 152, 26, 0.3);
                }

                .home-button.secondary {
                    background: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }

                .home-button.secondary:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .home-pains,
                .home-services {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .home-pains h2,
                .home-services h2,
                .home-diagnostic h2,
                .home-cta h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    color: #111827;
                    margin-bottom: 3rem;
                }

                .home-pain-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }

                .home-pain-card {
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 2rem;
                }

                .home-pain-icon {
                    font-size: 2rem;
                }

                .home-pain-card h3 {
                    font-size: 1.2rem;
                    color: #111827;
                    margin: 1rem 0 0.5rem;
                }

                .home-pain-card p {
                    color: #6b7280;
                    line-height: 1.6;
                }

                .home-service-list {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    max-width: 760px;
                    margin: 0 auto;
                }

                .home-service {
                    display: flex;
                    gap: 1.5rem;
                    align-items: flex-start;
                }

                .home-service-number {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fe981a;
                    flex-shrink: 0;
                }

                .home-service h3 {
                    font-size: 1.2rem;
                    color: #111827;
                    margin-bottom: 0.4rem;
                }

                .home-service p {
                    color: #6b7280;
                    line-height: 1.6;
                }

                .home-diagnostic {
                    background: #f3f6fa;
                    padding: 5rem 2rem;
                }

                .home-diagnostic-inner {
                    max-width: 700px;
                    margin: 0 auto;
                    text-align: center;
                }

                .home-diagnostic p {
                    color: #4b5563;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .home-diagnostic .home-button.primary,
                .home-cta .home-button.primary {
                    background: #1a3c5e;
                }

                .home-diagnostic .home-button.primary:hover,
                .home-cta .home-button.primary:hover {
                    background: #2d5a8a;
                    box-shadow: 0 10px 20px rgba(26, 60, 94, 0.25);
                }

                .home-cta {
                    text-align: center;
                    padding: 6rem 2rem;
                }

                .home-cta p {
                    color: #6b7280;
                    margin: -2rem 0 2rem;
                }

                @media (max-width: 768px) {
                    .home-hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
